// Shorthand for return Err(DsfError::new(ErrorKind::Foo))
//
// Usage:
// - err!(HeaderNotFound)          -> return Err(DsfError::new(ErrorKind::HeaderNotFound))
// - err!(InvalidHeader(Message))  -> return Err(DsfError::new(ErrorKind::InvalidHeader(Message)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::DsfError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:literal)) => {
		return Err(crate::error::DsfError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

pub(crate) use err;
