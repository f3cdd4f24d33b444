use sensor_settings::{
    from_protocol_capabilities_with, max_settings, to_protocol_settings, ErrorBehavior, ProtocolCapabilities,
    SettingsBuilder, UnknownCategoryBehavior,
};

fn main() {
    simple_logger::SimpleLogger::new().init().unwrap();

    // An accelerometer capability report, including a code this crate does not know.
    let mut report = ProtocolCapabilities::new();
    report.insert(0, vec![25, 50, 100, 200].into_iter().collect());
    report.insert(1, vec![16].into_iter().collect());
    report.insert(2, vec![2, 4, 8].into_iter().collect());
    report.insert(4, vec![3].into_iter().collect());
    report.insert(9, vec![1].into_iter().collect());

    let behavior = ErrorBehavior { unknown_category: UnknownCategoryBehavior::Ignore };
    let caps = from_protocol_capabilities_with(&report, &behavior).unwrap();

    for (category, values) in &caps {
        println!("{} ({}): {:?}", category, category.unit(), values);
    }

    let max = max_settings(&caps).unwrap();
    println!("max settings: {:?}", to_protocol_settings(&max));

    let chosen = SettingsBuilder::new(&caps).sample_rate(50).range(4).build().unwrap();
    println!("chosen settings: {:?}", to_protocol_settings(&chosen));
}
