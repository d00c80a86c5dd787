pub mod connection;

pub use connection::DbConnection;
