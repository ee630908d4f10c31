// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locale metadata.

use serde::Serialize;

/// The hard-coded system locale. Every resolution chain ends here.
pub const DEFAULT_LOCALE: &str = "en";

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	#[default]
	Ltr,
	Rtl,
}

/// Display metadata for a shipped locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocaleInfo {
	pub code: &'static str,
	/// English name, used in admin settings.
	pub name: &'static str,
	/// Name in the locale itself, used by the language switcher.
	pub native_name: &'static str,
	pub direction: Direction,
}

/// Locales that ship with a built-in message file.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "fr",
		name: "French",
		native_name: "Français",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "es",
		name: "Spanish",
		native_name: "Español",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ar",
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
];

/// Look up metadata for a locale code.
pub fn locale_info(code: &str) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|info| info.code == code)
}

/// Returns true if the locale ships with a built-in message file.
///
/// Resolution does not call this: an unknown code is carried through and
/// simply misses in the catalog.
pub fn is_supported(code: &str) -> bool {
	locale_info(code).is_some()
}

/// Returns true for right-to-left locales. Unknown codes are treated as LTR.
pub fn is_rtl(code: &str) -> bool {
	locale_info(code)
		.map(|info| info.direction == Direction::Rtl)
		.unwrap_or(false)
}

/// All shipped locales, in switcher order.
pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}
