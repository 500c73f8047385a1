pub mod defaults;
pub mod password_gen;
pub mod testpass;
