//! Locator tables for the shop application under test.
//!
//! Each logical target lists its strategies most reliable first: the
//! accessibility id the app exposes, then a position-based structural
//! query, then (where tapping blind is acceptable) a normalized coordinate
//! region. Coordinate regions assume nothing about resolution; they are
//! denormalized against the live screen size at resolve time.

use appdrive::{LocatorSpec, Strategy};

const EDIT_TEXT: &str = "android.widget.EditText";
const BUTTON: &str = "android.widget.Button";
const IMAGE_VIEW: &str = "android.widget.ImageView";

pub const EMAIL_FIELD: LocatorSpec = LocatorSpec::new(
	"email field",
	&[
		Strategy::SemanticId("email_field"),
		Strategy::StructuralQuery {
			class: EDIT_TEXT,
			index: 0,
		},
	],
);

pub const PASSWORD_FIELD: LocatorSpec = LocatorSpec::new(
	"password field",
	&[
		Strategy::SemanticId("password_field"),
		Strategy::StructuralQuery {
			class: EDIT_TEXT,
			index: 1,
		},
	],
);

pub const LOGIN_BUTTON: LocatorSpec = LocatorSpec::new(
	"login button",
	&[
		Strategy::SemanticId("login_button"),
		Strategy::StructuralQuery {
			class: BUTTON,
			index: -1,
		},
		Strategy::CoordinateRegion { x: 0.5, y: 0.78 },
	],
);

/// Products render as image tiles; the first tile is the topmost match.
pub const FIRST_PRODUCT: LocatorSpec = LocatorSpec::new(
	"first product",
	&[
		Strategy::SemanticId("product_1"),
		Strategy::StructuralQuery {
			class: IMAGE_VIEW,
			index: 0,
		},
		Strategy::CoordinateRegion { x: 0.25, y: 0.35 },
	],
);

/// Falls back to the last button on screen, then a lower-center tap.
pub const ADD_TO_CART: LocatorSpec = LocatorSpec::new(
	"add to cart",
	&[
		Strategy::SemanticId("add_to_cart_button"),
		Strategy::StructuralQuery {
			class: BUTTON,
			index: -1,
		},
		Strategy::CoordinateRegion { x: 0.5, y: 0.88 },
	],
);

/// No semantic locator available; fixed top-right region.
pub const CART_ICON: LocatorSpec = LocatorSpec::new(
	"cart icon",
	&[Strategy::CoordinateRegion { x: 0.92, y: 0.06 }],
);

pub const SIGNUP_LINK: LocatorSpec =
	LocatorSpec::new("signup link", &[Strategy::SemanticId("signup_link")]);

pub const SIGNUP_EMAIL_FIELD: LocatorSpec = LocatorSpec::new(
	"signup email field",
	&[
		Strategy::SemanticId("signup_email_field"),
		Strategy::StructuralQuery {
			class: EDIT_TEXT,
			index: 0,
		},
	],
);

pub const SIGNUP_PASSWORD_FIELD: LocatorSpec = LocatorSpec::new(
	"signup password field",
	&[
		Strategy::SemanticId("signup_password_field"),
		Strategy::StructuralQuery {
			class: EDIT_TEXT,
			index: 1,
		},
	],
);

pub const SIGNUP_CONFIRM_FIELD: LocatorSpec = LocatorSpec::new(
	"signup confirm password field",
	&[
		Strategy::SemanticId("signup_confirm_password_field"),
		Strategy::StructuralQuery {
			class: EDIT_TEXT,
			index: 2,
		},
	],
);

pub const SIGNUP_BUTTON: LocatorSpec = LocatorSpec::new(
	"signup button",
	&[
		Strategy::SemanticId("signup_button"),
		Strategy::StructuralQuery {
			class: BUTTON,
			index: -1,
		},
	],
);
