/// Helper macro to build an input processor out of a closure.
///
/// The closure receives the value parsed as the declared type and returns an
/// `anyhow::Result` of the output type. Errors raised by the closure are
/// associated with the span of input that was consumed.
///
/// # Examples
///
/// ```
/// use lib::input::IStr;
/// use lib::prelude::*;
///
/// #[derive(Debug, PartialEq)]
/// struct Color(&'static str);
///
/// lib::from_input! {
///     |value: &'static str| -> Color {
///         ensure!(matches!(value, "red" | "green" | "blue"), "unknown color `{value}`");
///         Ok(Color(value))
///     }
/// }
///
/// let mut input = IStr::new(b"red\npurple\n");
/// assert_eq!(input.try_line::<Color>()?, Some(Color("red")));
///
/// let error = input.try_line::<Color>().unwrap_err();
/// assert_eq!(error.span(), 4..10);
/// assert_eq!(error.to_string(), "unknown color `purple`");
/// # Ok::<_, lib::input::IStrError>(())
/// ```
#[macro_export]
macro_rules! from_input {
    (|$value:ident: $ty:ty| -> $out:ty $block:block) => {
        impl $crate::input::FromInput for $out {
            #[inline]
            fn try_from_input(
                p: &mut $crate::input::IStr,
            ) -> core::result::Result<Option<Self>, $crate::input::IStrError> {
                let original = *p;

                let Some(value) = <$ty as $crate::input::FromInput>::try_from_input(p)? else {
                    return Ok(None);
                };

                match (|$value: $ty| -> core::result::Result<$out, $crate::macro_support::Error> {
                    $block
                })(value)
                {
                    Ok(value) => Ok(Some(value)),
                    Err(e) => {
                        let span = original.index()..p.index();
                        *p = original;
                        Err($crate::input::IStrError::any(span, e))
                    }
                }
            }
        }
    };
}
