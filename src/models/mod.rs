pub mod department;
pub mod employee;
pub mod msg;
pub mod page;
