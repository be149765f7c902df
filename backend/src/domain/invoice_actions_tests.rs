//! Behaviour coverage for the invoice mutation service.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use mockall::Sequence;
use mockall::predicate::eq;
use rstest::rstest;
use uuid::Uuid;

use super::invoice::{InvoiceChanges, InvoiceStatus};
use super::invoice_actions::{
    CREATE_DB_ERROR_MESSAGE, CREATE_MISSING_FIELDS_MESSAGE, DELETE_CONFIRMATION_MESSAGE,
    DELETE_DB_ERROR_MESSAGE, INVOICES_LISTING_PATH, InvoiceActions, UPDATE_DB_ERROR_MESSAGE,
    UPDATE_MISSING_FIELDS_MESSAGE,
};
use super::invoice_form::{
    ActionState, AMOUNT_FIELD, AMOUNT_RANGE_MESSAGE, CUSTOMER_ID_FIELD,
    CUSTOMER_REQUIRED_MESSAGE, FormFields, STATUS_FIELD,
};
use super::ports::{
    InvoiceMutations, InvoiceRepositoryError, MockInvoiceRepository, MockListingCache,
    MockNavigator,
};

struct FixtureClock {
    utc_now: DateTime<Utc>,
}

impl Clock for FixtureClock {
    fn local(&self) -> DateTime<Local> {
        self.utc_now.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.utc_now
    }
}

fn fixture_clock() -> Arc<dyn Clock> {
    Arc::new(FixtureClock {
        utc_now: Utc
            .with_ymd_and_hms(2026, 8, 29, 10, 30, 0)
            .single()
            .expect("valid fixture timestamp"),
    })
}

fn fixture_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 29).expect("valid fixture date")
}

fn service(
    repository: MockInvoiceRepository,
    cache: MockListingCache,
) -> InvoiceActions<MockInvoiceRepository, MockListingCache> {
    InvoiceActions::new(Arc::new(repository), Arc::new(cache), fixture_clock())
}

fn valid_fields() -> FormFields {
    FormFields::from_pairs([
        (CUSTOMER_ID_FIELD, "c1"),
        (AMOUNT_FIELD, "45.50"),
        (STATUS_FIELD, "pending"),
    ])
}

fn quiet_navigator() -> MockNavigator {
    let mut navigator = MockNavigator::new();
    navigator.expect_redirect_to().never();
    navigator
}

#[tokio::test]
async fn create_persists_cents_and_todays_date_then_invalidates_and_redirects() {
    let mut repository = MockInvoiceRepository::new();
    repository
        .expect_insert()
        .withf(|invoice| {
            invoice.customer_id == "c1"
                && invoice.amount_cents == 4550
                && invoice.status == InvoiceStatus::Pending
                && invoice.date == fixture_date()
        })
        .times(1)
        .returning(|_| Ok(()));

    let mut sequence = Sequence::new();
    let mut cache = MockListingCache::new();
    cache
        .expect_invalidate()
        .with(eq(INVOICES_LISTING_PATH))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    let mut navigator = MockNavigator::new();
    navigator
        .expect_redirect_to()
        .with(eq(INVOICES_LISTING_PATH))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());

    let state = service(repository, cache)
        .create_invoice(ActionState::default(), &valid_fields(), &navigator)
        .await;

    assert_eq!(state, ActionState::default());
}

#[rstest]
#[case("0")]
#[case("-12.50")]
#[case("garbage")]
#[tokio::test]
async fn create_rejects_non_positive_amount_without_side_effects(#[case] amount: &str) {
    let mut repository = MockInvoiceRepository::new();
    repository.expect_insert().never();
    let mut cache = MockListingCache::new();
    cache.expect_invalidate().never();
    let navigator = quiet_navigator();

    let fields = FormFields::from_pairs([
        (CUSTOMER_ID_FIELD, "c1"),
        (AMOUNT_FIELD, amount),
        (STATUS_FIELD, "paid"),
    ]);
    let state = service(repository, cache)
        .create_invoice(ActionState::default(), &fields, &navigator)
        .await;

    assert_eq!(state.message.as_deref(), Some(CREATE_MISSING_FIELDS_MESSAGE));
    assert_eq!(
        state.errors.get(AMOUNT_FIELD),
        Some(&vec![AMOUNT_RANGE_MESSAGE.to_owned()])
    );
}

#[tokio::test]
async fn create_with_blank_customer_reports_the_field_and_writes_nothing() {
    let mut repository = MockInvoiceRepository::new();
    repository.expect_insert().never();
    let mut cache = MockListingCache::new();
    cache.expect_invalidate().never();
    let navigator = quiet_navigator();

    let fields = FormFields::from_pairs([
        (CUSTOMER_ID_FIELD, ""),
        (AMOUNT_FIELD, "10"),
        (STATUS_FIELD, "paid"),
    ]);
    let state = service(repository, cache)
        .create_invoice(ActionState::default(), &fields, &navigator)
        .await;

    assert_eq!(
        state.errors.get(CUSTOMER_ID_FIELD),
        Some(&vec![CUSTOMER_REQUIRED_MESSAGE.to_owned()])
    );
}

#[rstest]
#[case(InvoiceRepositoryError::connection("pool exhausted"))]
#[case(InvoiceRepositoryError::query("constraint violated"))]
#[tokio::test]
async fn create_folds_persistence_failure_into_the_state(
    #[case] error: InvoiceRepositoryError,
) {
    let mut repository = MockInvoiceRepository::new();
    repository
        .expect_insert()
        .times(1)
        .returning(move |_| Err(error.clone()));
    let mut cache = MockListingCache::new();
    cache.expect_invalidate().never();
    let navigator = quiet_navigator();

    let state = service(repository, cache)
        .create_invoice(ActionState::default(), &valid_fields(), &navigator)
        .await;

    assert_eq!(state.message.as_deref(), Some(CREATE_DB_ERROR_MESSAGE));
    assert!(!state.has_errors());
}

#[tokio::test]
async fn update_changes_only_mutable_fields_of_the_target_row() {
    let id = Uuid::new_v4();
    let mut repository = MockInvoiceRepository::new();
    repository
        .expect_update()
        .with(
            eq(id),
            eq(InvoiceChanges {
                customer_id: "c9".to_owned(),
                amount_cents: 1999,
                status: InvoiceStatus::Paid,
            }),
        )
        .times(1)
        .returning(|_, _| Ok(()));

    let mut sequence = Sequence::new();
    let mut cache = MockListingCache::new();
    cache
        .expect_invalidate()
        .with(eq(INVOICES_LISTING_PATH))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    let mut navigator = MockNavigator::new();
    navigator
        .expect_redirect_to()
        .with(eq(INVOICES_LISTING_PATH))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());

    let fields = FormFields::from_pairs([
        (CUSTOMER_ID_FIELD, "c9"),
        (AMOUNT_FIELD, "19.99"),
        (STATUS_FIELD, "paid"),
    ]);
    let state = service(repository, cache)
        .update_invoice(id, ActionState::default(), &fields, &navigator)
        .await;

    assert_eq!(state, ActionState::default());
}

#[tokio::test]
async fn update_validation_failure_skips_the_store() {
    let mut repository = MockInvoiceRepository::new();
    repository.expect_update().never();
    let mut cache = MockListingCache::new();
    cache.expect_invalidate().never();
    let navigator = quiet_navigator();

    let state = service(repository, cache)
        .update_invoice(
            Uuid::new_v4(),
            ActionState::default(),
            &FormFields::default(),
            &navigator,
        )
        .await;

    assert_eq!(state.message.as_deref(), Some(UPDATE_MISSING_FIELDS_MESSAGE));
    assert_eq!(state.errors.len(), 3);
}

#[tokio::test]
async fn update_folds_persistence_failure_into_the_state() {
    let mut repository = MockInvoiceRepository::new();
    repository
        .expect_update()
        .times(1)
        .returning(|_, _| Err(InvoiceRepositoryError::query("row vanished")));
    let mut cache = MockListingCache::new();
    cache.expect_invalidate().never();
    let navigator = quiet_navigator();

    let state = service(repository, cache)
        .update_invoice(
            Uuid::new_v4(),
            ActionState::default(),
            &valid_fields(),
            &navigator,
        )
        .await;

    assert_eq!(state.message.as_deref(), Some(UPDATE_DB_ERROR_MESSAGE));
}

#[tokio::test]
async fn delete_confirms_and_invalidates_without_redirecting() {
    let id = Uuid::new_v4();
    let mut repository = MockInvoiceRepository::new();
    repository
        .expect_delete()
        .with(eq(id))
        .times(1)
        .returning(|_| Ok(()));
    let mut cache = MockListingCache::new();
    cache
        .expect_invalidate()
        .with(eq(INVOICES_LISTING_PATH))
        .times(1)
        .return_const(());

    let state = service(repository, cache).delete_invoice(id).await;

    assert_eq!(state.message.as_deref(), Some(DELETE_CONFIRMATION_MESSAGE));
    assert!(!state.has_errors());
}

#[tokio::test]
async fn delete_failure_returns_the_database_message() {
    let mut repository = MockInvoiceRepository::new();
    repository
        .expect_delete()
        .times(1)
        .returning(|_| Err(InvoiceRepositoryError::connection("pool exhausted")));
    let mut cache = MockListingCache::new();
    cache.expect_invalidate().never();

    let state = service(repository, cache)
        .delete_invoice(Uuid::new_v4())
        .await;

    assert_eq!(state.message.as_deref(), Some(DELETE_DB_ERROR_MESSAGE));
}
