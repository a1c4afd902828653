//! Abstractions for pagination.

use std::num::NonZeroU32;

use derive_more::{Display, Into};

/// Generic page of items.
#[derive(Clone, Debug)]
pub struct Page<I> {
    /// Items on this [`Page`].
    pub items: Vec<I>,

    /// Number of this [`Page`].
    pub number: PageNumber,

    /// Size this [`Page`] was requested with.
    pub size: PageSize,

    /// Total count of items across all [`Page`]s.
    pub total: u64,
}

impl<I> Page<I> {
    /// Creates a new [`Page`] from the provided items.
    #[must_use]
    pub fn new(
        selector: &Selector<impl Sized>,
        items: impl IntoIterator<Item = impl Into<I>>,
        total: u64,
    ) -> Self {
        Self {
            items: items.into_iter().map(Into::into).collect::<Vec<_>>(),
            number: selector.page,
            size: selector.size,
            total,
        }
    }

    /// Indicates whether a [`Page`] after this one exists.
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.number.get()) * u64::from(self.size.get()) < self.total
    }
}

/// 1-based number of a [`Page`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Into, PartialEq)]
pub struct PageNumber(NonZeroU32);

impl PageNumber {
    /// First [`PageNumber`].
    pub const FIRST: Self = Self(NonZeroU32::MIN);

    /// Creates a new [`PageNumber`], if the provided value is 1-based.
    #[must_use]
    pub fn new(number: u32) -> Option<Self> {
        NonZeroU32::new(number).map(Self)
    }

    /// Returns this [`PageNumber`] as a primitive.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// Size of a requested [`Page`].
#[derive(Clone, Copy, Debug, Display, Eq, Hash, Into, PartialEq)]
pub struct PageSize(NonZeroU32);

impl PageSize {
    /// Default [`PageSize`].
    pub const DEFAULT: Self = match NonZeroU32::new(10) {
        Some(size) => Self(size),
        None => unreachable!(),
    };

    /// Maximum allowed [`PageSize`].
    pub const MAX: Self = match NonZeroU32::new(100) {
        Some(size) => Self(size),
        None => unreachable!(),
    };

    /// Creates a new [`PageSize`], if the provided value is positive and
    /// doesn't exceed the [`PageSize::MAX`].
    #[must_use]
    pub fn new(size: u32) -> Option<Self> {
        NonZeroU32::new(size)
            .filter(|s| *s <= Self::MAX.0)
            .map(Self)
    }

    /// Returns this [`PageSize`] as a primitive.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// [`Page`] selector.
#[derive(Clone, Debug, Default)]
pub struct Selector<F> {
    /// [`PageNumber`] to select.
    pub page: PageNumber,

    /// [`PageSize`] to select with.
    pub size: PageSize,

    /// Additional filter being applied to the result.
    pub filter: F,
}

/// Defines pagination types.
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_pagination {
    ($node:ty, $filter:ty) => {
        #[doc = "A [`Page`] of [`$node`]s."]
        pub type Page = $crate::pagination::Page<$node>;

        #[doc = "[`Page`] selector."]
        pub type Selector = $crate::pagination::Selector<$filter>;
    };
}

#[cfg(test)]
mod spec {
    use super::{Page, PageNumber, PageSize, Selector};

    #[test]
    fn page_number_is_one_based() {
        assert!(PageNumber::new(0).is_none());
        assert_eq!(PageNumber::new(1), Some(PageNumber::FIRST));
    }

    #[test]
    fn page_size_is_bounded() {
        assert!(PageSize::new(0).is_none());
        assert!(PageSize::new(101).is_none());
        assert_eq!(PageSize::new(100), Some(PageSize::MAX));
    }

    #[test]
    fn has_more() {
        let selector = Selector::<()>::default();

        let page = Page::<u32>::new(&selector, [1_u32, 2, 3], 25);
        assert!(page.has_more());

        let selector = Selector::<()> {
            page: PageNumber::new(3).unwrap(),
            ..Selector::default()
        };
        let page = Page::<u32>::new(&selector, [1_u32], 25);
        assert!(!page.has_more());
    }
}
