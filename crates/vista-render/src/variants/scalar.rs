//! Single-number wrappers: units, angles and half floats.

use vista_core::{decode, Result, Value};

use crate::renderer::{Renderer, Target};

/// `Deg`, `Rad` and `Unit`: the stored number without its unit.
#[derive(Debug)]
pub struct UnitRenderer<'v> {
    target: Target<'v>,
}

pub fn construct_unit<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    Ok(Box::new(UnitRenderer { target }))
}

impl Renderer for UnitRenderer<'_> {
    fn kind(&self) -> &'static str {
        "unit"
    }

    fn value(&self) -> &dyn Value {
        self.target.value
    }

    fn to_text(&self) -> Result<String> {
        self.target.field_text("_value")
    }
}

/// `Math::Half`: the 16-bit pattern in `_data` decoded as binary16.
#[derive(Debug)]
pub struct HalfRenderer<'v> {
    target: Target<'v>,
}

pub fn construct_half<'v>(target: Target<'v>) -> Result<Box<dyn Renderer + 'v>> {
    Ok(Box::new(HalfRenderer { target }))
}

impl HalfRenderer<'_> {
    fn bits(&self) -> Result<u16> {
        let data = self.target.value.field("_data")?;
        match data
            .raw_bytes()
            .and_then(|bytes| decode::read_u16(&bytes, data.byte_order()))
        {
            Ok(bits) => Ok(bits),
            // Hosts that only print the integer still give us the pattern.
            Err(e) => data.to_text().trim().parse::<u16>().map_err(|_| e),
        }
    }
}

impl Renderer for HalfRenderer<'_> {
    fn kind(&self) -> &'static str {
        "half"
    }

    fn value(&self) -> &dyn Value {
        self.target.value
    }

    fn to_text(&self) -> Result<String> {
        Ok(decode::format_float(decode::half_to_f64(self.bits()?)))
    }
}

#[cfg(test)]
mod tests {
    use vista_core::{ByteOrder, Node, SnapshotValue};

    use crate::registry::registry;
    use crate::testing::text;

    fn half(bytes: [u8; 2]) -> Node {
        Node::new("Magnum::Math::Half")
            .with_field("_data", Node::new("unsigned short").with_bytes(bytes))
    }

    #[test]
    fn angle_prints_stored_number() {
        let deg = Node::new("Magnum::Math::Deg<float>")
            .with_field("_value", Node::scalar("float", "90"));
        assert_eq!(text(deg), "90");
    }

    #[test]
    fn unit_without_value_field_fails() {
        let rad = Node::new("Magnum::Math::Rad<double>");
        let v = crate::testing::value(rad);
        assert!(registry().resolve(&v).to_text().is_err());
    }

    #[test]
    fn half_one_little_endian() {
        assert_eq!(text(half([0x00, 0x3C])), "1.0");
    }

    #[test]
    fn half_honors_big_endian() {
        let v = SnapshotValue::new(half([0x3C, 0x00]), ByteOrder::Big);
        assert_eq!(registry().resolve(&v).to_text().unwrap(), "1.0");
    }

    #[test]
    fn half_special_values() {
        assert_eq!(text(half([0x00, 0xC0])), "-2.0");
        assert_eq!(text(half([0x00, 0x7C])), "inf");
        assert_eq!(text(half([0x00, 0x7E])), "nan");
    }

    #[test]
    fn half_from_integer_text() {
        let node = Node::new("Magnum::Math::Half")
            .with_field("_data", Node::scalar("unsigned short", "15360"));
        assert_eq!(text(node), "1.0");
    }

    #[test]
    fn half_short_data_is_a_decode_error() {
        let node = Node::new("Magnum::Math::Half")
            .with_field("_data", Node::new("unsigned short").with_bytes([0x3C]));
        let v = crate::testing::value(node);
        let err = registry().resolve(&v).to_text().unwrap_err();
        assert!(matches!(err, vista_core::InspectError::Decode { .. }));
    }
}
