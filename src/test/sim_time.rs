use crate::sim::SimTime;

#[test]
fn sim_time_orders_totally() {
    assert!(SimTime(1.0) < SimTime(2.5));
    assert_eq!(SimTime(3.0), SimTime(3.0));
    assert_eq!(SimTime(2.0).max(SimTime(7.0)), SimTime(7.0));
    assert_eq!(SimTime::default(), SimTime::ZERO);
}

#[test]
fn sim_time_arithmetic_helpers() {
    let t = SimTime(7.0);
    assert_eq!(t.after(2.0), SimTime(9.0));
    assert_eq!(SimTime(9.0).since(t), 2.0);
    assert_eq!(t.as_f64(), 7.0);
}

#[test]
fn sim_time_displays_two_decimals() {
    assert_eq!(SimTime(2.0).to_string(), "2.00");
    assert_eq!(SimTime(1.0 / 3.0).to_string(), "0.33");
}
