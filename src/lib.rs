pub use galena_protocol as protocol;
pub use galena_server as server;
