// Module declaration file for handlers/

pub mod invocations;
pub mod ping;
pub mod recommendations;

pub use invocations::invocations_handler;
pub use ping::ping_handler;
pub use recommendations::recommendations_handler;
