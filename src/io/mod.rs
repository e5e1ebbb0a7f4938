pub mod portfolio_io;
