//! # Employee record
//!
//! A value object describing a person by name, age and salary, with
//! structural equality, a stable hash code and a readable rendering.
//!
//! ```
//! use employee_record::Employee;
//!
//! let mut alice = Employee::new("Alice", 30, 50000.0);
//! let snapshot = alice.clone();
//! alice.set_age(31);
//!
//! assert_eq!(alice.age(), 31);
//! assert_ne!(alice, snapshot);
//! assert_eq!(snapshot.to_string(), "Employee{name='Alice', age=30, salary=50000.0}");
//! ```
//!
//! Binaries call [`telemetry::setup_tracing`] once at startup to get
//! structured logs filtered by `RUST_LOG`.

pub mod domain;
pub mod error;
pub mod telemetry;


pub use domain::{Employee, EmployeeConfig};
pub use error::{Result, TelemetryError};
