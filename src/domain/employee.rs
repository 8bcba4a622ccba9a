use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Bit pattern every NaN salary collapses to before comparing or hashing.
const CANONICAL_NAN_BITS: u64 = 0x7ff8_0000_0000_0000;

fn canonical_bits(value: f64) -> u64 {
    if value.is_nan() {
        CANONICAL_NAN_BITS
    } else {
        value.to_bits()
    }
}

/// Options recognized when building an [`Employee`].
///
/// Omitted trailing fields come from `Default`:
///
/// ```
/// use employee_record::{Employee, EmployeeConfig};
///
/// let employee = Employee::from(EmployeeConfig {
///     name: Some("Alice".to_string()),
///     age: 30,
///     ..Default::default()
/// });
/// assert_eq!(employee.salary(), 0.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmployeeConfig {
    pub name: Option<String>,
    pub age: i32,
    pub salary: f64,
}

/// A person with a name, an age and a salary.
///
/// Equality is structural. Salaries compare by their IEEE-754 bits, with all
/// NaNs treated as one value, so a NaN salary equals another NaN salary while
/// `0.0` and `-0.0` differ.
#[derive(Debug, Clone, Default)]
pub struct Employee {
    name: Option<String>,
    age: i32,
    salary: f64,
}

impl Employee {
    /// Creates an employee with every field given.
    ///
    /// # Arguments
    /// * `name` - Display name
    /// * `age` - Age in years, unchecked
    /// * `salary` - Salary, unchecked
    pub fn new(name: impl Into<String>, age: i32, salary: f64) -> Self {
        Self {
            name: Some(name.into()),
            age,
            salary,
        }
    }

    /// Creates an employee with only a name; age and salary are zero.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn from_config(config: EmployeeConfig) -> Self {
        Self {
            name: config.name,
            age: config.age,
            salary: config.salary,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Leaves the name unset.
    pub fn clear_name(&mut self) {
        self.name = None;
    }

    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    pub fn set_salary(&mut self, salary: f64) {
        self.salary = salary;
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.set_name(name);
        self
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn with_salary(mut self, salary: f64) -> Self {
        self.salary = salary;
        self
    }

    /// Compares against a value of unknown type.
    ///
    /// Returns `false` for anything that is not an `Employee`.
    pub fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Employee>()
            .is_some_and(|employee| self == employee)
    }

    /// 32-bit hash combining name, age and salary in that order.
    ///
    /// Each step computes `31 * acc + field_hash` with wrapping arithmetic,
    /// starting from 1. The name hashes as the polynomial over its UTF-16
    /// code units (0 when unset) and the salary as the XOR of the high and
    /// low halves of its canonical bits. The result is stable across runs
    /// and platforms, unlike the [`Hash`] impl fed to a `std` hasher.
    pub fn hash_code(&self) -> i32 {
        let name_hash = self.name.as_deref().map_or(0, |name| {
            name.encode_utf16()
                .fold(0i32, |acc, unit| acc.wrapping_mul(31).wrapping_add(i32::from(unit)))
        });
        let bits = canonical_bits(self.salary);
        let salary_hash = (bits ^ (bits >> 32)) as i32;

        [name_hash, self.age, salary_hash]
            .into_iter()
            .fold(1i32, |acc, hash| acc.wrapping_mul(31).wrapping_add(hash))
    }
}

impl From<EmployeeConfig> for Employee {
    fn from(config: EmployeeConfig) -> Self {
        Self::from_config(config)
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.age == other.age
            && canonical_bits(self.salary) == canonical_bits(other.salary)
            && self.name == other.name
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.age.hash(state);
        canonical_bits(self.salary).hash(state);
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee{{name='{}', age={}, salary={:?}}}",
            self.name.as_deref().unwrap_or("null"),
            self.age,
            self.salary
        )
    }
}
