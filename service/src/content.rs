//! Content [`Store`] definitions.

use std::collections::HashSet;

use derive_more::{Display, Error as StdError, From};
use tracerr::Traced;
use tracing as log;

use crate::{
    command::{
        add_cart_item, remove_cart_item, resolve_cart_id,
        update_cart_item_quantity, AddCartItem, RemoveCartItem,
        ResolveCartId, UpdateCartItemQuantity,
    },
    domain::{cart, course, user, Course},
    infra::backend,
    query, read, Command, Query, Service,
};

/// Client-side content state of the front end.
///
/// The single stateful piece of the application: owns the resolved
/// [`cart::Id`], the last authoritative cart state, and the navigation
/// data fetched once on [`bootstrap()`]. Constructed explicitly and
/// handed to the view layer, so the cart logic stays testable without
/// any rendering tree.
///
/// All mutable state is owned exclusively by this [`Store`] and written
/// only through its `&mut self` operations: interleaving is decided by
/// the event loop of the embedder, not by locks. Every mutation ends in
/// a full re-fetch, so a last-fetch-wins outcome is acceptable.
///
/// [`bootstrap()`]: Store::bootstrap
#[derive(Debug)]
pub struct Store<B, S> {
    /// [`Service`] executing the operations of this [`Store`].
    service: Service<B, S>,

    /// ID of the authenticated [`User`], if any.
    ///
    /// [`User`]: crate::domain::User
    identity: Option<user::Id>,

    /// Resolved [`cart::Id`], cached until the identity changes.
    cart_id: Option<cart::Id>,

    /// Last authoritative cart state fetched from the backend.
    cart: read::cart::Summary,

    /// Categories with sample courses, for the navigation tree.
    categories: Vec<read::dashboard::CategoryPreview>,

    /// Most popular courses, for the landing sections.
    top_courses: Vec<Course>,

    /// [`Operation`]s being in flight.
    pending: HashSet<Operation>,

    /// [`Notice`]s accumulated for the user.
    notices: Vec<Notice>,
}

/// In-flight operation key of a [`Store`].
///
/// Keys are stable per target, so indicators of concurrent distinct
/// operations don't visually collide.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operation {
    /// Adding a [`Course`] to the cart.
    Add(course::Id),

    /// Updating the [`cart::Quantity`] of a cart line.
    UpdateQuantity(course::Id),

    /// Removing a cart line.
    Remove(course::Id),

    /// Re-fetching the authoritative cart state.
    Refresh,
}

/// Transient user-visible notification of a [`Store`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    /// Text of this [`Notice`].
    pub text: String,
}

impl<B, S> Store<B, S> {
    /// Creates a new empty [`Store`] on top of the provided [`Service`].
    #[must_use]
    pub fn new(service: Service<B, S>) -> Self {
        Self {
            service,
            identity: None,
            cart_id: None,
            cart: read::cart::Summary::default(),
            categories: Vec::new(),
            top_courses: Vec::new(),
            pending: HashSet::new(),
            notices: Vec::new(),
        }
    }

    /// Returns the [`Service`] of this [`Store`].
    #[must_use]
    pub fn service(&self) -> &Service<B, S> {
        &self.service
    }

    /// Returns the ID of the authenticated [`User`], if any.
    ///
    /// [`User`]: crate::domain::User
    #[must_use]
    pub fn identity(&self) -> Option<user::Id> {
        self.identity
    }

    /// Returns the cart [`cart::LineItem`]s as last reported by the
    /// backend.
    #[must_use]
    pub fn items(&self) -> &[cart::LineItem] {
        &self.cart.items
    }

    /// Returns the authoritative count of cart lines.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cart.count()
    }

    /// Returns the navigation categories.
    #[must_use]
    pub fn categories(&self) -> &[read::dashboard::CategoryPreview] {
        &self.categories
    }

    /// Returns the most popular courses.
    #[must_use]
    pub fn top_courses(&self) -> &[Course] {
        &self.top_courses
    }

    /// Derives the [`cart::Totals`] of the current cart state.
    ///
    /// Pure: recomputed from the [`cart::LineItem`]s on every call and
    /// never persisted.
    #[must_use]
    pub fn totals(&self) -> cart::Totals {
        self.cart.totals(self.service.config().pricing)
    }

    /// Indicates whether the provided [`Operation`] is in flight.
    #[must_use]
    pub fn is_pending(&self, operation: &Operation) -> bool {
        self.pending.contains(operation)
    }

    /// Takes the accumulated [`Notice`]s, leaving none behind.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Pushes a new [`Notice`] for the user.
    fn notice(&mut self, text: impl Into<String>) {
        self.notices.push(Notice { text: text.into() });
    }

    /// Resolves the [`cart::Id`] of the current visitor, caching it until
    /// the identity changes.
    async fn resolve_cart_id(
        &mut self,
    ) -> Result<cart::Id, Traced<resolve_cart_id::ExecutionError>>
    where
        Service<B, S>: Command<
            ResolveCartId,
            Ok = cart::Id,
            Err = Traced<resolve_cart_id::ExecutionError>,
        >,
    {
        if let Some(id) = &self.cart_id {
            return Ok(id.clone());
        }

        let id = self
            .service
            .execute(ResolveCartId {
                identity: self.identity,
            })
            .await?;
        self.cart_id = Some(id.clone());

        Ok(id)
    }

    /// Fetches the authoritative cart state, replacing the local one.
    async fn fetch_cart(&mut self) -> Result<(), RefreshError>
    where
        Service<B, S>: Command<
                ResolveCartId,
                Ok = cart::Id,
                Err = Traced<resolve_cart_id::ExecutionError>,
            > + Query<
                query::cart::Summary,
                Ok = read::cart::Summary,
                Err = Traced<backend::Error>,
            >,
    {
        let cart_id = self.resolve_cart_id().await?;
        self.cart = self
            .service
            .execute(query::cart::Summary::by(cart_id))
            .await?;
        Ok(())
    }

    /// Performs the one-time bootstrap: one dashboard fetch plus one cart
    /// refresh.
    ///
    /// Both are non-critical: a failed fetch leaves the corresponding
    /// slice empty and logs the error, the embedder renders progressively
    /// as data arrives.
    pub async fn bootstrap(&mut self)
    where
        Service<B, S>: Command<
                ResolveCartId,
                Ok = cart::Id,
                Err = Traced<resolve_cart_id::ExecutionError>,
            > + Query<
                query::cart::Summary,
                Ok = read::cart::Summary,
                Err = Traced<backend::Error>,
            > + Query<
                query::dashboard::Aggregate,
                Ok = read::dashboard::Aggregate,
                Err = Traced<backend::Error>,
            >,
    {
        let cart_id = match self.resolve_cart_id().await {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("failed to resolve a cart identifier: {e}");
                None
            }
        };

        let (aggregate, summary) = futures::join!(
            self.service.execute(query::dashboard::Aggregate::by(())),
            async {
                match cart_id {
                    Some(id) => Some(
                        self.service
                            .execute(query::cart::Summary::by(id))
                            .await,
                    ),
                    None => None,
                }
            },
        );

        match aggregate {
            Ok(aggregate) => {
                self.categories = aggregate.categories;
                self.top_courses = aggregate.top_courses;
            }
            Err(e) => log::error!("failed to fetch the dashboard: {e}"),
        }
        match summary {
            Some(Ok(summary)) => self.cart = summary,
            Some(Err(e)) => log::error!("failed to fetch the cart: {e}"),
            None => {}
        }
    }

    /// Re-fetches the authoritative cart state.
    ///
    /// On failure the previously fetched state stays untouched and a
    /// [`Notice`] is surfaced.
    pub async fn refresh(&mut self)
    where
        Service<B, S>: Command<
                ResolveCartId,
                Ok = cart::Id,
                Err = Traced<resolve_cart_id::ExecutionError>,
            > + Query<
                query::cart::Summary,
                Ok = read::cart::Summary,
                Err = Traced<backend::Error>,
            >,
    {
        _ = self.pending.insert(Operation::Refresh);
        let result = self.fetch_cart().await;
        _ = self.pending.remove(&Operation::Refresh);

        if let Err(e) = result {
            log::warn!("failed to refresh the cart: {e}");
            self.notice("Failed to refresh the cart");
        }
    }

    /// Adds a [`Course`] to the cart, then re-fetches the authoritative
    /// cart state.
    pub async fn add_item(
        &mut self,
        course_id: course::Id,
        quantity: cart::Quantity,
        access: cart::Access,
    ) where
        Service<B, S>: Command<
                ResolveCartId,
                Ok = cart::Id,
                Err = Traced<resolve_cart_id::ExecutionError>,
            > + Command<
                AddCartItem,
                Ok = (),
                Err = Traced<add_cart_item::ExecutionError>,
            > + Query<
                query::cart::Summary,
                Ok = read::cart::Summary,
                Err = Traced<backend::Error>,
            >,
    {
        if quantity < cart::Quantity::ONE {
            self.notice("Quantity must be at least 1");
            return;
        }

        let key = Operation::Add(course_id);
        _ = self.pending.insert(key);
        let result: Result<(), MutationError> = async {
            let cart_id = self.resolve_cart_id().await?;
            self.service
                .execute(AddCartItem {
                    cart_id,
                    course_id,
                    quantity,
                    access,
                })
                .await?;
            Ok(())
        }
        .await;
        _ = self.pending.remove(&key);

        match result {
            Ok(()) => self.refresh().await,
            Err(e) => {
                log::warn!("failed to add an item to the cart: {e}");
                self.notice("Failed to add the course to the cart");
            }
        }
    }

    /// Updates the [`cart::Quantity`] of a cart line, then re-fetches the
    /// authoritative cart state.
    ///
    /// Quantities below `1` are rejected locally without a network call:
    /// removal goes through [`remove_item()`].
    ///
    /// [`remove_item()`]: Store::remove_item
    pub async fn update_quantity(
        &mut self,
        course_id: course::Id,
        quantity: cart::Quantity,
    ) where
        Service<B, S>: Command<
                ResolveCartId,
                Ok = cart::Id,
                Err = Traced<resolve_cart_id::ExecutionError>,
            > + Command<
                UpdateCartItemQuantity,
                Ok = (),
                Err = Traced<update_cart_item_quantity::ExecutionError>,
            > + Query<
                query::cart::Summary,
                Ok = read::cart::Summary,
                Err = Traced<backend::Error>,
            >,
    {
        if quantity < cart::Quantity::ONE {
            self.notice("Quantity must be at least 1");
            return;
        }

        let key = Operation::UpdateQuantity(course_id);
        _ = self.pending.insert(key);
        let result: Result<(), MutationError> = async {
            let cart_id = self.resolve_cart_id().await?;
            self.service
                .execute(UpdateCartItemQuantity {
                    cart_id,
                    course_id,
                    quantity,
                })
                .await?;
            Ok(())
        }
        .await;
        _ = self.pending.remove(&key);

        match result {
            Ok(()) => self.refresh().await,
            Err(e) => {
                log::warn!("failed to update a cart quantity: {e}");
                self.notice("Failed to update the quantity");
            }
        }
    }

    /// Removes a cart line, then re-fetches the authoritative cart state.
    pub async fn remove_item(&mut self, course_id: course::Id)
    where
        Service<B, S>: Command<
                ResolveCartId,
                Ok = cart::Id,
                Err = Traced<resolve_cart_id::ExecutionError>,
            > + Command<
                RemoveCartItem,
                Ok = (),
                Err = Traced<remove_cart_item::ExecutionError>,
            > + Query<
                query::cart::Summary,
                Ok = read::cart::Summary,
                Err = Traced<backend::Error>,
            >,
    {
        let key = Operation::Remove(course_id);
        _ = self.pending.insert(key);
        let result: Result<(), MutationError> = async {
            let cart_id = self.resolve_cart_id().await?;
            self.service
                .execute(RemoveCartItem { cart_id, course_id })
                .await?;
            Ok(())
        }
        .await;
        _ = self.pending.remove(&key);

        match result {
            Ok(()) => self.refresh().await,
            Err(e) => {
                log::warn!("failed to remove an item from the cart: {e}");
                self.notice("Failed to remove the course from the cart");
            }
        }
    }

    /// Applies a login/logout of the embedder.
    ///
    /// A changed identity drops the cached [`cart::Id`] and performs
    /// exactly one re-resolution and one re-fetch. The anonymous
    /// [`cart::DeviceToken`] stays persisted: logging out reattaches to
    /// the anonymous cart.
    pub async fn set_identity(&mut self, identity: Option<user::Id>)
    where
        Service<B, S>: Command<
                ResolveCartId,
                Ok = cart::Id,
                Err = Traced<resolve_cart_id::ExecutionError>,
            > + Query<
                query::cart::Summary,
                Ok = read::cart::Summary,
                Err = Traced<backend::Error>,
            >,
    {
        if self.identity == identity {
            return;
        }

        self.identity = identity;
        self.cart_id = None;
        self.refresh().await;
    }
}

/// Error of a cart mutation performed by a [`Store`].
#[derive(Debug, Display, From, StdError)]
enum MutationError {
    /// Failed to resolve the [`cart::Id`].
    #[display("failed to resolve a cart identifier: {_0}")]
    Resolve(Traced<resolve_cart_id::ExecutionError>),

    /// [`AddCartItem`] failed.
    #[display("failed to add a cart item: {_0}")]
    Add(Traced<add_cart_item::ExecutionError>),

    /// [`UpdateCartItemQuantity`] failed.
    #[display("failed to update a cart item: {_0}")]
    Update(Traced<update_cart_item_quantity::ExecutionError>),

    /// [`RemoveCartItem`] failed.
    #[display("failed to remove a cart item: {_0}")]
    Remove(Traced<remove_cart_item::ExecutionError>),
}

/// Error of re-fetching the authoritative cart state.
#[derive(Debug, Display, From, StdError)]
enum RefreshError {
    /// Failed to resolve the [`cart::Id`].
    #[display("failed to resolve a cart identifier: {_0}")]
    Resolve(Traced<resolve_cart_id::ExecutionError>),

    /// Failed to fetch the cart from the backend.
    #[display("failed to fetch the cart: {_0}")]
    Fetch(Traced<backend::Error>),
}

#[cfg(test)]
mod spec {
    use std::{
        sync::{
            atomic::{AtomicBool, AtomicUsize, Ordering},
            Arc, Mutex,
        },
        time::Duration,
    };

    use common::{
        money::Currency,
        operations::{By, Insert, Load, Select, Update},
        Money,
    };
    use jsonwebtoken::DecodingKey;
    use rust_decimal::Decimal;
    use tracerr::Traced;

    use crate::{
        domain::{cart, course, user},
        infra::{backend, storage::Memory, Backend},
        read, Config, Service,
    };

    use super::{Notice, Store};

    /// Test double of the remote backend, holding the cart server-side.
    #[derive(Clone, Debug, Default)]
    struct Stub {
        /// Server-side cart lines.
        items: Arc<Mutex<Vec<cart::LineItem>>>,

        /// Dashboard payload to deliver.
        aggregate: Arc<read::dashboard::Aggregate>,

        /// Indicator whether mutations must fail.
        fail_mutations: Arc<AtomicBool>,

        /// Number of cart fetches performed.
        fetches: Arc<AtomicUsize>,

        /// Number of mutations performed.
        mutations: Arc<AtomicUsize>,
    }

    impl Stub {
        fn failure() -> Traced<backend::Error> {
            tracerr::new!(backend::Error::from(
                crate::infra::backend::rest::Error::UnexpectedStatus {
                    status: 500,
                    body: "boom".into(),
                }
            ))
        }

        fn items(&self) -> Vec<cart::LineItem> {
            self.items.lock().unwrap_or_else(|e| e.into_inner()).clone()
        }
    }

    impl Backend<Select<By<read::cart::Summary, cart::Id>>> for Stub {
        type Ok = read::cart::Summary;
        type Err = Traced<backend::Error>;

        async fn execute(
            &self,
            _: Select<By<read::cart::Summary, cart::Id>>,
        ) -> Result<Self::Ok, Self::Err> {
            _ = self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(read::cart::Summary {
                items: self.items(),
            })
        }
    }

    impl Backend<Update<cart::QuantityUpdate>> for Stub {
        type Ok = ();
        type Err = Traced<backend::Error>;

        async fn execute(
            &self,
            Update(update): Update<cart::QuantityUpdate>,
        ) -> Result<Self::Ok, Self::Err> {
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(Self::failure());
            }
            _ = self.mutations.fetch_add(1, Ordering::SeqCst);

            let mut items =
                self.items.lock().unwrap_or_else(|e| e.into_inner());
            if update.quantity.is_removal() {
                items.retain(|i| i.course_id != update.course_id);
            } else if let Some(item) = items
                .iter_mut()
                .find(|i| i.course_id == update.course_id)
            {
                item.quantity = update.quantity;
            }
            Ok(())
        }
    }

    impl Backend<Insert<cart::NewItem>> for Stub {
        type Ok = ();
        type Err = Traced<backend::Error>;

        async fn execute(
            &self,
            Insert(new): Insert<cart::NewItem>,
        ) -> Result<Self::Ok, Self::Err> {
            if self.fail_mutations.load(Ordering::SeqCst) {
                return Err(Self::failure());
            }
            _ = self.mutations.fetch_add(1, Ordering::SeqCst);

            self.items
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .push(item(new.course_id, 100, new.quantity.get()));
            Ok(())
        }
    }

    impl Backend<Select<By<read::dashboard::Aggregate, ()>>> for Stub {
        type Ok = read::dashboard::Aggregate;
        type Err = Traced<backend::Error>;

        async fn execute(
            &self,
            _: Select<By<read::dashboard::Aggregate, ()>>,
        ) -> Result<Self::Ok, Self::Err> {
            Ok((*self.aggregate).clone())
        }
    }

    fn item(
        course_id: course::Id,
        price: u64,
        quantity: u32,
    ) -> cart::LineItem {
        cart::LineItem {
            course_id,
            name: course::Name::new("Rust for Beginners").unwrap(),
            image: None,
            category: None,
            modules: 10.into(),
            duration: Duration::from_secs(6 * 3600),
            language: course::Language::new("English").unwrap(),
            unit_price: Money {
                amount: Decimal::from(price),
                currency: Currency::Inr,
            },
            quantity: quantity.into(),
            access: cart::Access::INDIVIDUAL,
        }
    }

    fn store(stub: Stub) -> Store<Stub, Memory> {
        Store::new(Service::new(
            Config {
                identity_decoding_key: DecodingKey::from_secret(b"secret"),
                pricing: cart::pricing::Policy::default(),
            },
            stub,
            Memory::new(),
        ))
    }

    #[tokio::test]
    async fn rejects_quantity_below_one_without_network() {
        let course_id = course::Id::new();
        let stub = Stub::default();
        stub.items
            .lock()
            .unwrap()
            .push(item(course_id, 100, 2));

        let mut store = store(stub.clone());
        store.refresh().await;

        store.update_quantity(course_id, 0.into()).await;

        assert_eq!(stub.mutations.load(Ordering::SeqCst), 0);
        assert_eq!(store.items()[0].quantity, 2.into());
        assert_eq!(
            store.take_notices(),
            vec![Notice {
                text: "Quantity must be at least 1".into()
            }],
        );
    }

    #[tokio::test]
    async fn remove_item_is_a_zero_quantity_update() {
        let course_id = course::Id::new();
        let stub = Stub::default();
        stub.items
            .lock()
            .unwrap()
            .push(item(course_id, 100, 2));

        let mut store = store(stub.clone());
        store.refresh().await;
        assert_eq!(store.count(), 1);

        store.remove_item(course_id).await;

        assert!(stub.items().is_empty());
        assert_eq!(store.count(), 0);
        assert!(store.take_notices().is_empty());
    }

    #[tokio::test]
    async fn zero_quantity_update_equals_removal() {
        use crate::command::UpdateCartItemQuantity;

        let course_id = course::Id::new();

        let removed = Stub::default();
        removed.items.lock().unwrap().push(item(course_id, 100, 2));
        let mut removed_store = store(removed.clone());
        removed_store.refresh().await;
        removed_store.remove_item(course_id).await;

        let updated = Stub::default();
        updated.items.lock().unwrap().push(item(course_id, 100, 2));
        let mut updated_store = store(updated.clone());
        updated_store.refresh().await;
        let cart_id = updated_store
            .service()
            .execute(crate::command::ResolveCartId { identity: None })
            .await
            .unwrap();
        updated_store
            .service()
            .execute(UpdateCartItemQuantity {
                cart_id,
                course_id,
                quantity: cart::Quantity::ZERO,
            })
            .await
            .unwrap();
        updated_store.refresh().await;

        assert!(removed.items().is_empty());
        assert!(updated.items().is_empty());
        assert_eq!(removed_store.count(), updated_store.count());
    }

    #[tokio::test]
    async fn successful_mutation_refetches_authoritative_state() {
        let course_id = course::Id::new();
        let stub = Stub::default();
        stub.items
            .lock()
            .unwrap()
            .push(item(course_id, 100, 1));

        let mut store = store(stub.clone());
        store.refresh().await;
        let fetches_before = stub.fetches.load(Ordering::SeqCst);

        store.update_quantity(course_id, 5.into()).await;

        assert_eq!(store.items()[0].quantity, 5.into());
        assert_eq!(stub.fetches.load(Ordering::SeqCst), fetches_before + 1);
    }

    #[tokio::test]
    async fn failed_mutation_keeps_previous_state() {
        let course_id = course::Id::new();
        let stub = Stub::default();
        stub.items
            .lock()
            .unwrap()
            .push(item(course_id, 100, 2));

        let mut store = store(stub.clone());
        store.refresh().await;

        stub.fail_mutations.store(true, Ordering::SeqCst);
        store.update_quantity(course_id, 5.into()).await;

        assert_eq!(store.items()[0].quantity, 2.into());
        assert_eq!(
            store.take_notices(),
            vec![Notice {
                text: "Failed to update the quantity".into()
            }],
        );
    }

    #[tokio::test]
    async fn bootstrap_tolerates_empty_dashboard() {
        let mut store = store(Stub::default());

        store.bootstrap().await;

        assert!(store.categories().is_empty());
        assert!(store.top_courses().is_empty());
        assert!(store.take_notices().is_empty());
    }

    #[tokio::test]
    async fn login_reresolves_once_and_keeps_anonymous_token() {
        let stub = Stub::default();
        let mut store = store(stub.clone());

        store.bootstrap().await;
        let fetches_before = stub.fetches.load(Ordering::SeqCst);

        let anonymous_token = store
            .service()
            .storage()
            .execute(Load::<cart::DeviceToken>::new())
            .await
            .unwrap()
            .expect("bootstrap persisted an anonymous token");

        store.set_identity(Some(user::Id::new())).await;

        assert_eq!(stub.fetches.load(Ordering::SeqCst), fetches_before + 1);
        assert_eq!(
            store
                .service()
                .storage()
                .execute(Load::<cart::DeviceToken>::new())
                .await
                .unwrap(),
            Some(anonymous_token),
        );
    }

    #[tokio::test]
    async fn add_item_appears_in_next_fetch() {
        let course_id = course::Id::new();
        let stub = Stub::default();
        let mut store = store(stub.clone());

        store
            .add_item(course_id, 1.into(), cart::Access::INDIVIDUAL)
            .await;

        assert_eq!(store.count(), 1);
        assert_eq!(store.items()[0].course_id, course_id);
    }

    #[tokio::test]
    async fn totals_follow_the_cart() {
        let stub = Stub::default();
        {
            let mut items = stub.items.lock().unwrap();
            items.push(item(course::Id::new(), 100, 2));
            items.push(item(course::Id::new(), 50, 1));
        }

        let mut store = store(stub);
        store.refresh().await;

        let totals = store.totals();
        assert_eq!(totals.subtotal.amount, Decimal::from(250));
        assert_eq!(totals.discount.amount, Decimal::from(50));
        assert_eq!(totals.tax.amount, Decimal::from(45));
        assert_eq!(totals.total.amount, Decimal::from(245));
    }
}
