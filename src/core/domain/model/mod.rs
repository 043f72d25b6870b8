pub mod api_response;
pub mod credentials;
pub mod ctyun_connection;
pub mod disk;
pub mod node;
pub mod order;
pub mod state;
pub mod vm;
pub mod volume;
