//! Request middleware: typed session access and authentication guards.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
