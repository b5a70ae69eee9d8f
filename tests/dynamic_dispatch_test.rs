mod common;

use common::*;
use rollup_payroll::application::engine::DappEngine;
use rollup_payroll::domain::ledger::PayrollLedger;
use rollup_payroll::domain::ports::{ClockBox, RollupHostBox};
use rollup_payroll::infrastructure::clock::FixedClock;
use rollup_payroll::infrastructure::in_memory::InMemoryRollupHost;

#[tokio::test]
async fn test_engine_runs_on_boxed_ports_in_a_task() {
    let host = InMemoryRollupHost::new();
    host.push(command(ALICE, "salary:3")).await;
    host.push(inspect("total")).await;

    let host_box: RollupHostBox = Box::new(host.clone());
    let clock_box: ClockBox = Box::new(FixedClock(end_of_month()));

    // Verify Send by moving the engine into a spawned task
    let handle = tokio::spawn(async move {
        let mut engine = DappEngine::new(host_box, clock_box, PayrollLedger::default());
        run_until_idle(&mut engine).await;
        engine.audit().total_processed()
    });

    assert_eq!(handle.await.unwrap(), 1);
    assert_eq!(host.pending().await, 0);
    assert_eq!(host.notices().await.len(), 1);
    assert_eq!(host.reports().await.len(), 1);
}
