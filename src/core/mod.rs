//! Core module containing the data model, validation and error types

pub mod customer;
pub mod error;
pub mod field;
pub mod validation;

pub use customer::{Address, Customer, CustomerDetails, CustomerId, MAX_ADDRESSES};
pub use error::{
    ClienteleError, ConfigError, FieldValidationError, FormError, LookupError, StorageError,
    StoreError, ValidationError,
};
pub use field::FieldFormat;
pub use validation::validate_details;
