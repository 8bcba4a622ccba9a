use employee_record::telemetry::setup_tracing;
use employee_record::{Employee, EmployeeConfig};
use tracing::{info, info_span};

fn main() -> Result<(), String> {
    setup_tracing().map_err(|e| e.to_string())?;

    info!("Building employees from each construction form");

    let employees = [
        Employee::default(),
        Employee::named("Bob"),
        Employee::from(EmployeeConfig {
            name: Some("Carol".to_string()),
            age: 41,
            ..Default::default()
        }),
        Employee::new("Alice", 30, 50000.0),
    ];
    for employee in &employees {
        info!(employee = %employee, hash_code = employee.hash_code(), "Employee built");
    }

    let _span = info_span!("birthday").entered();
    let mut alice = Employee::new("Alice", 30, 50000.0);
    let snapshot = alice.clone();
    alice.set_age(31);
    info!(
        before = %snapshot,
        after = %alice,
        still_equal = (alice == snapshot),
        "Age updated"
    );

    info!("Demo completed successfully");
    Ok(())
}
