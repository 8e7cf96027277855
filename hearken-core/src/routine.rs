//! # Listen Routines
//!
//! A listen routine is a typed callable bound at registration time, never a
//! by-name invocation. Any `Fn(&L, T1, .., Tn) -> O` with up to six
//! parameters is a [`ListenRoutine`] for the argument tuple `(T1, .., Tn)`,
//! provided the output implements [`IntoListenResult`].
//!
//! ```rust
//! use hearken_core::ListenRoutine;
//!
//! struct Orders;
//!
//! impl Orders {
//!     fn on_created(&self, id: u64, amount: u32) -> Result<(), std::io::Error> {
//!         let _ = (id, amount);
//!         Ok(())
//!     }
//! }
//!
//! let routine = Orders::on_created;
//! assert!(routine.invoke(&Orders, (7, 100)).is_ok());
//! ```

use crate::error::BoxError;

/// Conversion of a routine's return value into the dispatch result.
///
/// An `Err` is boxed through its own `Into<BoxError>` conversion and nothing
/// else: a routine returning a `BoxError` hands back that very allocation.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be returned from a listen routine",
    label = "listen routines return `()` or `Result<(), E>`",
    note = "The error type must convert into `BoxError`."
)]
pub trait IntoListenResult {
    /// Converts the output.
    fn into_listen_result(self) -> Result<(), BoxError>;
}

impl IntoListenResult for () {
    fn into_listen_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E> IntoListenResult for Result<(), E>
where
    E: Into<BoxError>,
{
    fn into_listen_result(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}

/// A handling routine of listener `L` taking the argument tuple `Args`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot handle arguments `{Args}` for listener `{L}`",
    label = "signature does not match the resolver's arguments",
    note = "Listen routines are `Fn(&{L}, ..) -> ()` or `Fn(&{L}, ..) -> Result<(), E>` taking the resolver's arguments in order."
)]
pub trait ListenRoutine<L, Args>: Send + Sync + 'static {
    /// Invokes the routine on `listener`.
    fn invoke(&self, listener: &L, args: Args) -> Result<(), BoxError>;
}

impl<F, L, O> ListenRoutine<L, ()> for F
where
    F: Fn(&L) -> O + Send + Sync + 'static,
    O: IntoListenResult,
{
    fn invoke(&self, listener: &L, _args: ()) -> Result<(), BoxError> {
        (self)(listener).into_listen_result()
    }
}

/// Macro to implement ListenRoutine for functions with N arguments.
macro_rules! impl_listen_routine {
    ($($T:ident),+) => {
        impl<F, L, $($T,)+ O> ListenRoutine<L, ($($T,)+)> for F
        where
            F: Fn(&L, $($T,)+) -> O + Send + Sync + 'static,
            O: IntoListenResult,
        {
            #[allow(non_snake_case)]
            fn invoke(&self, listener: &L, ($($T,)+): ($($T,)+)) -> Result<(), BoxError> {
                (self)(listener, $($T,)+).into_listen_result()
            }
        }
    };
}

impl_listen_routine!(T1);
impl_listen_routine!(T1, T2);
impl_listen_routine!(T1, T2, T3);
impl_listen_routine!(T1, T2, T3, T4);
impl_listen_routine!(T1, T2, T3, T4, T5);
impl_listen_routine!(T1, T2, T3, T4, T5, T6);
