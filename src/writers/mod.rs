pub mod homebank;

pub use homebank::HomeBankWriter;
