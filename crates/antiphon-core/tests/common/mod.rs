pub mod gabc_server;
