//! Pool and exchange configuration.
//!
//! [`PoolConfig`] is the declarative blueprint for one pool;
//! [`ExchangeConfig`] carries the defaults the exchange stamps onto every
//! pool it creates.

mod exchange_config;
mod pool_config;

pub use exchange_config::ExchangeConfig;
pub use pool_config::PoolConfig;
