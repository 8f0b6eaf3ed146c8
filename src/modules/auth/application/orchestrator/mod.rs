pub mod account_deletion;
