use std::sync::Arc;
use strom::SourceConnector;

#[must_use]
pub fn get_connector() -> Arc<dyn SourceConnector> {
    if std::env::var("STROM_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Arc::new(strom_mock::MockConnector::new())
    } else {
        Arc::new(strom_smard::SmardConnector::new_default().expect("default SMARD client"))
    }
}

#[must_use]
pub fn get_flows_connector() -> Arc<dyn SourceConnector> {
    if std::env::var("STROM_EXAMPLES_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        Arc::new(strom_mock::MockConnector::new())
    } else {
        Arc::new(strom_eirgrid::EirGridConnector::new_default().expect("default EirGrid client"))
    }
}
