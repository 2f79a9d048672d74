use super::config::{GalaxyConfig, GalaxyOptions, ViewportClass};

#[test]
fn viewport_classification_breaks_at_768() {
	assert_eq!(ViewportClass::from_width(375.0), ViewportClass::Mobile);
	assert_eq!(ViewportClass::from_width(768.0), ViewportClass::Mobile);
	assert_eq!(ViewportClass::from_width(769.0), ViewportClass::Desktop);
	assert_eq!(ViewportClass::from_width(1440.0), ViewportClass::Desktop);
}

#[test]
fn density_divisor_follows_viewport_class() {
	let config = GalaxyConfig::default();
	assert_eq!(config.density.divisor_for(ViewportClass::Desktop), 8000.0);
	assert_eq!(config.density.divisor_for(ViewportClass::Mobile), 12000.0);
}

#[test]
fn options_parse_with_full_defaults() {
	let options: GalaxyOptions = serde_json::from_str("{}").unwrap();
	assert_eq!(options.density_desktop, 8000.0);
	assert_eq!(options.density_mobile, 12000.0);
	assert!(!options.connections);
	assert_eq!(options.max_particles, Some(200));
	assert_eq!(options.burst_count, 3);
	assert_eq!(options.seed, None);
}

#[test]
fn partial_options_keep_remaining_defaults() {
	let options: GalaxyOptions =
		serde_json::from_str(r#"{ "connections": true, "density_desktop": 15000.0 }"#).unwrap();
	assert!(options.connections);
	assert_eq!(options.density_desktop, 15000.0);
	assert_eq!(options.density_mobile, 12000.0);
	assert_eq!(options.burst_count, 3);
}

#[test]
fn options_flow_into_the_engine_config() {
	let options: GalaxyOptions = serde_json::from_str(
		r#"{ "connections": true, "max_particles": null, "burst_count": 5, "seed": 99 }"#,
	)
	.unwrap();
	let config = GalaxyConfig::from(options);

	assert!(config.connection.enabled);
	assert_eq!(config.population.max, None);
	assert_eq!(config.burst.count, 5);
	// Motion tuning is not host-exposed; the defaults ride along.
	assert_eq!(config.motion.speed_cap, 0.2);
}
