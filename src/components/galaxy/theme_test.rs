use super::theme::{Color, Palette, Theme, ThemeMode};

#[test]
fn palettes_are_disjoint_between_modes() {
	let dark = Palette::dark();
	let light = Palette::light();

	for color in &dark.colors {
		assert!(
			!light.contains(*color),
			"{:?} appears in both palettes",
			color
		);
	}
}

#[test]
fn palette_lookup_wraps() {
	let palette = Palette::dark();
	assert_eq!(palette.get(0), palette.get(palette.len()));
	assert!(!palette.is_empty());
}

#[test]
fn color_css_formatting() {
	assert_eq!(Color::rgb(0x7c, 0x3a, 0xed).to_css(), "#7c3aed");
	assert_eq!(
		Color::rgb(0x7c, 0x3a, 0xed).with_alpha(0.5).to_css(),
		"rgba(124, 58, 237, 0.5)"
	);
}

#[test]
fn for_mode_selects_the_matching_theme() {
	assert_eq!(Theme::for_mode(ThemeMode::Dark).mode, ThemeMode::Dark);
	assert_eq!(Theme::for_mode(ThemeMode::Light).mode, ThemeMode::Light);
}

#[test]
fn light_mode_glows_every_tier() {
	let light = Theme::light();
	assert!(light.glow.bright > 0.0);
	assert!(light.glow.medium > 0.0);
	assert!(light.glow.dim > 0.0);

	// Night skies skip the dim-tier glow; faint stars stay soft points.
	let dark = Theme::dark();
	assert!(dark.glow.dim == 0.0);
}

#[test]
fn connection_lines_read_stronger_in_light_mode() {
	let dark = Theme::dark();
	let light = Theme::light();
	assert!(light.connection.pair_alpha > dark.connection.pair_alpha);
	assert!(light.connection.pointer_alpha > dark.connection.pointer_alpha);
	assert!(light.connection.pair_width > dark.connection.pair_width);
}
