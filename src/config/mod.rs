pub mod credentials;
pub mod load;
pub mod model;
