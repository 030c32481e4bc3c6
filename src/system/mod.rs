pub mod collector;
pub mod network;
pub mod sampler;
pub mod window;

#[cfg(test)]
pub mod testing;
