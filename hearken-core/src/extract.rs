//! # Parameter Extraction
//!
//! Provides the extractor pattern for listen routines that take more than
//! the event itself. Each parameter type implements [`FromEvent`] for the
//! event type; a tuple of extractors implements [`FromEventParams`] and is
//! resolved left to right.
//!
//! ```rust,ignore
//! // Routine signature defines what to extract
//! fn on_paid(&self, id: OrderId, amount: Amount) -> Result<(), BillingError> { .. }
//!
//! // Resolver produces `(OrderId, Amount)` from an `OrderPaid` event
//! let resolver = ExtractListenResolver::<OrderPaid, (OrderId, Amount)>::new();
//! ```

use crate::error::{BoxError, ParamsError};
use std::convert::Infallible;

/// A trait for extracting data from an event synchronously.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be extracted from `{E}`",
    label = "missing `FromEvent` implementation",
    note = "Implement `FromEvent<{E}>` to use `{Self}` as a listen routine parameter."
)]
pub trait FromEvent<E>: Sized {
    /// The error type returned if extraction fails.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Attempt to extract `Self` from the given event.
    fn from_event(event: &E) -> Result<Self, Self::Error>;
}

impl<E, T> FromEvent<E> for Option<T>
where
    T: FromEvent<E>,
{
    type Error = Infallible;

    fn from_event(event: &E) -> Result<Self, Self::Error> {
        Ok(T::from_event(event).ok())
    }
}

impl<E, T> FromEvent<E> for Result<T, T::Error>
where
    T: FromEvent<E>,
{
    type Error = Infallible;

    fn from_event(event: &E) -> Result<Self, Self::Error> {
        Ok(T::from_event(event))
    }
}

/// An extractor that clones the entire event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload<E>(pub E);

impl<E: Clone> FromEvent<E> for Payload<E> {
    type Error = Infallible;

    fn from_event(event: &E) -> Result<Self, Self::Error> {
        Ok(Payload(event.clone()))
    }
}

/// An ordered parameter list extracted from an event.
pub trait FromEventParams<E>: Sized + Send {
    /// Extracts every parameter in order, stopping at the first failure.
    fn from_event_params(event: &E) -> Result<Self, ParamsError>;
}

impl<E> FromEventParams<E> for () {
    fn from_event_params(_event: &E) -> Result<Self, ParamsError> {
        Ok(())
    }
}

fn extract_at<E, T>(index: usize, event: &E) -> Result<T, ParamsError>
where
    T: FromEvent<E>,
{
    T::from_event(event).map_err(|e| ParamsError::Extract {
        index,
        param: std::any::type_name::<T>(),
        source: Box::new(e) as BoxError,
    })
}

/// Macro to implement FromEventParams for tuples of extractors.
macro_rules! impl_from_event_params {
    ($($T:ident => $idx:tt),+) => {
        impl<E, $($T,)+> FromEventParams<E> for ($($T,)+)
        where
            $($T: FromEvent<E> + Send,)+
        {
            #[allow(non_snake_case)]
            fn from_event_params(event: &E) -> Result<Self, ParamsError> {
                $(
                    let $T = extract_at::<E, $T>($idx, event)?;
                )+
                Ok(($($T,)+))
            }
        }
    };
}

impl_from_event_params!(T1 => 0);
impl_from_event_params!(T1 => 0, T2 => 1);
impl_from_event_params!(T1 => 0, T2 => 1, T3 => 2);
impl_from_event_params!(T1 => 0, T2 => 1, T3 => 2, T4 => 3);
impl_from_event_params!(T1 => 0, T2 => 1, T3 => 2, T4 => 3, T5 => 4);
impl_from_event_params!(T1 => 0, T2 => 1, T3 => 2, T4 => 3, T5 => 4, T6 => 5);
