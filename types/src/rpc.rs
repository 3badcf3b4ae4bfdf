mod block;
mod call_request;
mod transaction;

pub use block::RpcBlock;
pub use call_request::CallRequest;
pub use transaction::RpcTransaction;
