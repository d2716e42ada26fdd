//! Store endpoint cases
//!
//! Order lifecycle plus the inventory snapshot. The order points at the
//! pet suite's fixture pet.

use super::{ORDER_ID, PET_ID};
use smokehound_domain::{ApiRequest, BodyCheck, CaseSpec, Expectations, Order, Suite};

/// The order the store cases work with: one copy of the fixture pet,
/// shipping now.
fn fixture_order() -> Order {
    Order::new(ORDER_ID, PET_ID).completed()
}

/// Store suite cases in execution order.
#[must_use]
pub fn cases() -> Vec<CaseSpec> {
    vec![
        CaseSpec::single(
            Suite::Store,
            "place order",
            ApiRequest::post("/store/order", fixture_order()),
            Expectations::ok(),
        ),
        CaseSpec::single(
            Suite::Store,
            "find order by id",
            ApiRequest::get(format!("/store/order/{ORDER_ID}")),
            Expectations::one_of(vec![200, 404]),
        ),
        CaseSpec::single(
            Suite::Store,
            "get inventory",
            ApiRequest::get("/store/inventory"),
            Expectations::ok().with_check(BodyCheck::IsJson),
        ),
        CaseSpec::single(
            Suite::Store,
            "delete order",
            ApiRequest::delete(format!("/store/order/{ORDER_ID}")),
            Expectations::ok(),
        ),
    ]
}
