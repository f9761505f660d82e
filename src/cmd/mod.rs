pub mod domains;
pub mod init;
pub mod links;
pub mod price;
pub mod root;
pub mod validate;
