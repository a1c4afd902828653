//! Shopping cart definitions.

use std::time::Duration;

use common::{DateTime, Money};
use derive_more::{AsRef, Display, From, FromStr, Into};
use rand::{distributions::Alphanumeric, Rng as _};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{course, user};

/// Identifier of a server-side cart.
///
/// An authenticated [`user::Id`] always maps onto the same [`Id`], so a
/// user reattaches to the same cart across devices and sessions. An
/// anonymous session derives its [`Id`] from a locally persisted
/// [`DeviceToken`] instead.
#[derive(
    AsRef, Clone, Debug, Deserialize, Display, Eq, Hash, PartialEq, Serialize,
)]
#[as_ref(str, String)]
pub struct Id(String);

impl Id {
    /// Derives the [`Id`] owned by the provided [`user::Id`].
    #[must_use]
    pub fn for_user(user_id: user::Id) -> Self {
        Self(format!("cart_{user_id}"))
    }
}

impl From<DeviceToken> for Id {
    fn from(token: DeviceToken) -> Self {
        Self(token.0)
    }
}

/// Anonymous device token identifying a cart of a not authenticated
/// visitor.
///
/// Synthesized once per device and persisted client-locally, so every
/// subsequent anonymous session reuses the same server-side cart.
#[derive(
    AsRef,
    Clone,
    Debug,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    PartialEq,
    Serialize,
)]
#[as_ref(str, String)]
#[from(&str, String)]
pub struct DeviceToken(String);

impl DeviceToken {
    /// Synthesizes a new [`DeviceToken`] out of the current timestamp and
    /// a random suffix.
    #[must_use]
    pub fn generate() -> Self {
        let millis = DateTime::now().unix_timestamp_millis();
        let suffix = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(8)
            .map(|c| char::from(c).to_ascii_lowercase())
            .collect::<String>();

        Self(format!("anon_{millis}_{suffix}"))
    }
}

/// Quantity of a [`LineItem`].
///
/// Always a non-negative integer. `0` is the defined removal path: the
/// backend exposes no separate delete verb for cart items.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    Hash,
    Into,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
pub struct Quantity(u32);

impl Quantity {
    /// [`Quantity`] meaning removal of a [`LineItem`].
    pub const ZERO: Self = Self(0);

    /// Minimum [`Quantity`] of a [`LineItem`] kept in a cart.
    pub const ONE: Self = Self(1);

    /// Indicates whether this [`Quantity`] removes its [`LineItem`].
    #[must_use]
    pub const fn is_removal(self) -> bool {
        self.0 == 0
    }

    /// Returns this [`Quantity`] as a primitive.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

pub mod access {
    //! Access tagging of a [`LineItem`].
    //!
    //! [`LineItem`]: super::LineItem

    use std::num::NonZeroU32;

    use derive_more::{Display, Into};
    use serde::{Deserialize, Serialize};

    /// Kind of access a cart line is purchased with.
    #[derive(
        Clone,
        Copy,
        Debug,
        Deserialize,
        Eq,
        PartialEq,
        Serialize,
        strum::Display,
        strum::EnumString,
    )]
    #[repr(u8)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
    pub enum Kind {
        /// Purchase for a single learner.
        Individual = 1,

        /// Purchase on behalf of an educational institution.
        Institution = 2,

        /// Purchase on behalf of a company.
        Corporate = 3,
    }

    /// Maximum number of seats assignable under an [`Institution`] or
    /// [`Corporate`] purchase.
    ///
    /// [`Corporate`]: Kind::Corporate
    /// [`Institution`]: Kind::Institution
    #[derive(
        Clone,
        Copy,
        Debug,
        Deserialize,
        Display,
        Eq,
        Hash,
        Into,
        PartialEq,
        Serialize,
    )]
    pub struct SeatLimit(NonZeroU32);

    impl SeatLimit {
        /// Creates a new [`SeatLimit`], if the provided value is positive.
        #[must_use]
        pub fn new(seats: u32) -> Option<Self> {
            NonZeroU32::new(seats).map(Self)
        }
    }
}

/// Access tag of a [`LineItem`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Access {
    /// [`access::Kind`] of the purchase.
    #[serde(rename = "accessType")]
    pub kind: access::Kind,

    /// Optional seat-assignment limit of the purchase.
    pub seat_limit: Option<access::SeatLimit>,
}

impl Access {
    /// [`Access`] tag of a regular single-learner purchase.
    pub const INDIVIDUAL: Self = Self {
        kind: access::Kind::Individual,
        seat_limit: None,
    };
}

/// Single [`Course`] offering inside a cart.
///
/// [`Course`]: crate::domain::Course
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// ID of the [`Course`] this [`LineItem`] offers.
    ///
    /// [`Course`]: crate::domain::Course
    pub course_id: course::Id,

    /// Display name of the course.
    pub name: course::Name,

    /// Cover image of the course.
    pub image: Option<course::ImageUrl>,

    /// Category name of the course.
    pub category: Option<String>,

    /// Number of modules of the course.
    pub modules: course::ModuleCount,

    /// Total duration of the course content.
    #[serde(with = "super::course::duration_minutes")]
    pub duration: Duration,

    /// Language the course is taught in.
    pub language: course::Language,

    /// Price of a single unit of this [`LineItem`].
    #[serde(with = "common::money::serde")]
    pub unit_price: Money,

    /// [`Quantity`] of this [`LineItem`].
    pub quantity: Quantity,

    /// [`Access`] tag of this [`LineItem`].
    #[serde(flatten)]
    pub access: Access,
}

/// Payload of adding a new [`LineItem`] to a cart.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    /// [`Id`] of the cart to add the item to.
    pub cart_id: Id,

    /// ID of the [`Course`] being added.
    ///
    /// [`Course`]: crate::domain::Course
    pub course_id: course::Id,

    /// Initial [`Quantity`] of the item.
    pub quantity: Quantity,

    /// [`Access`] tag of the item.
    #[serde(flatten)]
    pub access: Access,
}

/// Payload of changing a [`LineItem`]'s [`Quantity`].
///
/// A [`Quantity::ZERO`] update removes the [`LineItem`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityUpdate {
    /// [`Id`] of the cart holding the item.
    pub cart_id: Id,

    /// ID of the [`Course`] the item offers.
    ///
    /// [`Course`]: crate::domain::Course
    pub course_id: course::Id,

    /// New [`Quantity`] of the item.
    pub quantity: Quantity,
}

pub mod pricing {
    //! Pricing policy applied to a cart.

    use common::Percent;
    use rust_decimal::Decimal;

    /// Promotional and tax rates applied when deriving [`Totals`].
    ///
    /// The rates are configuration rather than backend data. Whether that
    /// is intentional business policy is an open question inherited from
    /// the observed behavior, hence the rates stay overridable.
    ///
    /// [`Totals`]: super::Totals
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub struct Policy {
        /// Promotional discount rate.
        pub discount: Percent,

        /// Tax rate.
        pub tax: Percent,
    }

    impl Default for Policy {
        fn default() -> Self {
            Self {
                discount: Percent::new(Decimal::from(20)).expect("in range"),
                tax: Percent::new(Decimal::from(18)).expect("in range"),
            }
        }
    }
}

/// Derived totals of a cart.
///
/// Pure function of the [`LineItem`]s, recomputed on every use and never
/// persisted.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Totals {
    /// Sum of unit price times [`Quantity`] over all [`LineItem`]s.
    pub subtotal: Money,

    /// Promotional discount, rounded to a whole amount.
    pub discount: Money,

    /// Tax on the subtotal.
    pub tax: Money,

    /// `subtotal − discount + tax`.
    pub total: Money,
}

impl Totals {
    /// Derives the [`Totals`] of the provided [`LineItem`]s under the
    /// provided [`pricing::Policy`].
    ///
    /// The currency is taken from the first [`LineItem`]: the backend
    /// prices a single cart in a single currency.
    #[must_use]
    pub fn compute(items: &[LineItem], policy: pricing::Policy) -> Self {
        let currency = items
            .first()
            .map_or(common::money::Currency::Inr, |i| i.unit_price.currency);

        let subtotal = items.iter().fold(Decimal::ZERO, |acc, i| {
            acc + i.unit_price.amount * Decimal::from(i.quantity.get())
        });
        let discount = policy.discount.of(subtotal).round();
        let tax = policy.tax.of(subtotal);

        let money = |amount| Money { amount, currency };
        Self {
            subtotal: money(subtotal),
            discount: money(discount),
            tax: money(tax),
            total: money(subtotal - discount + tax),
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use common::{money::Currency, Money};
    use rust_decimal::Decimal;

    use crate::domain::{course, user};

    use super::{access, Access, DeviceToken, Id, LineItem, Quantity, Totals};

    fn item(price: u64, quantity: u32) -> LineItem {
        LineItem {
            course_id: course::Id::new(),
            name: course::Name::new("Rust for Beginners").unwrap(),
            image: None,
            category: Some("Programming".into()),
            modules: 12.into(),
            duration: Duration::from_secs(8 * 3600),
            language: course::Language::new("English").unwrap(),
            unit_price: Money {
                amount: Decimal::from(price),
                currency: Currency::Inr,
            },
            quantity: quantity.into(),
            access: Access::INDIVIDUAL,
        }
    }

    #[test]
    fn user_id_resolution_is_deterministic() {
        let user_id = user::Id::new();

        assert_eq!(Id::for_user(user_id), Id::for_user(user_id));
        assert!(AsRef::<str>::as_ref(&Id::for_user(user_id)).starts_with("cart_"));
    }

    #[test]
    fn device_token_has_expected_shape() {
        let token = DeviceToken::generate();

        let mut parts = AsRef::<str>::as_ref(&token).splitn(3, '_');
        assert_eq!(parts.next(), Some("anon"));
        assert!(parts.next().unwrap().parse::<i128>().is_ok());
        assert_eq!(parts.next().unwrap().len(), 8);
    }

    #[test]
    fn quantity_zero_is_removal() {
        assert!(Quantity::ZERO.is_removal());
        assert!(!Quantity::ONE.is_removal());
        assert!(!Quantity::from(7).is_removal());
    }

    #[test]
    fn seat_limit_is_positive() {
        assert!(access::SeatLimit::new(0).is_none());
        assert!(access::SeatLimit::new(25).is_some());
    }

    #[test]
    fn totals_match_pricing_policy() {
        let items = [item(100, 2), item(50, 1)];

        let totals = Totals::compute(&items, super::pricing::Policy::default());

        assert_eq!(totals.subtotal.amount, Decimal::from(250));
        assert_eq!(totals.discount.amount, Decimal::from(50));
        assert_eq!(totals.tax.amount, Decimal::from(45));
        assert_eq!(totals.total.amount, Decimal::from(245));
    }

    #[test]
    fn totals_of_empty_cart_are_zero() {
        let totals = Totals::compute(&[], super::pricing::Policy::default());

        assert_eq!(totals.subtotal.amount, Decimal::ZERO);
        assert_eq!(totals.total.amount, Decimal::ZERO);
    }

    #[test]
    fn line_item_wire_shape() {
        let json = serde_json::to_value(item(100, 2)).unwrap();

        assert!(json.get("courseId").is_some());
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["accessType"], "INDIVIDUAL");
        assert_eq!(json["unitPrice"], "100INR");
    }
}
