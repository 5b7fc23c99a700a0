//! Complex numbers, quaternions and their dual counterparts.

use vista_core::{Result, Value};

use crate::renderer::{Renderer, Target};

/// Which composite form is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Form {
    Complex,
    Dual,
    Quaternion,
}

#[derive(Debug)]
pub struct ComplexRenderer<'v> {
    target: Target<'v>,
    form: Form,
}

/// `Complex<T>`: `{real} + i{imaginary}`.
pub fn construct_complex<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    Ok(Box::new(ComplexRenderer {
        target,
        form: Form::Complex,
    }))
}

/// `DualComplex<T>` and `DualQuaternion<T>`: `({real}) + ε({dual})`.
pub fn construct_dual<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    Ok(Box::new(ComplexRenderer {
        target,
        form: Form::Dual,
    }))
}

/// `Quaternion<T>`: `[{vector}, {scalar}]`.
pub fn construct_quaternion<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    Ok(Box::new(ComplexRenderer {
        target,
        form: Form::Quaternion,
    }))
}

impl Renderer for ComplexRenderer<'_> {
    fn kind(&self) -> &'static str {
        match self.form {
            Form::Complex => "complex",
            Form::Dual => "dual",
            Form::Quaternion => "quaternion",
        }
    }

    fn value(&self) -> &dyn Value {
        self.target.value
    }

    fn to_text(&self) -> Result<String> {
        let t = &self.target;
        Ok(match self.form {
            Form::Complex => format!(
                "{} + i{}",
                t.field_text("_real")?,
                t.field_text("_imaginary")?
            ),
            Form::Dual => format!(
                "({}) + ε({})",
                t.field_text("_real")?,
                t.field_text("_dual")?
            ),
            Form::Quaternion => format!(
                "[{}, {}]",
                t.field_text("_vector")?,
                t.field_text("_scalar")?
            ),
        })
    }
}
