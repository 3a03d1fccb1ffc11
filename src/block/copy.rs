//! Block duplication with attribute overrides.
//!
//! A deep copy owns all of its nested state. A shallow copy shares nested
//! mutable state (the position track) with its source, so changes made
//! through either are seen by both. Overrides are applied after the
//! duplication, one at a time, through the same validating setter used at
//! construction; the first failing override aborts the copy.

use super::{AttrValue, BlockData};
use crate::util::Result;

/// How nested state is duplicated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CopyMode {
    /// Independent copy of everything.
    #[default]
    Deep,
    /// Top-level fields copied, nested state shared.
    Shallow,
}

/// Duplicate `source`, then apply `overrides` in order.
pub(crate) fn copy_block<T, I, K>(source: &T, mode: CopyMode, overrides: I) -> Result<T>
where
    T: BlockData + Clone,
    I: IntoIterator<Item = (K, AttrValue)>,
    K: AsRef<str>,
{
    let mut copy = source.clone();
    if mode == CopyMode::Shallow {
        copy.base_mut().share_track(source.base());
    }
    for (name, value) in overrides {
        copy.set_attribute(name.as_ref(), value)?;
    }
    Ok(copy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Block, Primitive, Spring};
    use crate::util::{Color, Error, Vector3};

    fn moving_block() -> Primitive {
        let block = Primitive::new();
        {
            let mut track = block.base().positions_mut();
            track.enabled = true;
            track.add_point(Vector3::ZERO, 1.0).unwrap();
            track.add_point(Vector3::new(0.0, 5.0, 0.0), 1.0).unwrap();
        }
        block
    }

    #[test]
    fn test_deep_copy_is_independent() {
        let original = moving_block();
        let copy = original.copy_with(CopyMode::Deep, Vec::<(&str, AttrValue)>::new()).unwrap();
        copy.base().positions_mut().add_point(Vector3::ONE, 2.0).unwrap();
        assert_eq!(original.base().positions().len(), 2);
        assert_eq!(copy.base().positions().len(), 3);
    }

    #[test]
    fn test_shallow_copy_shares_track() {
        let original = moving_block();
        let copy = original.copy_with(CopyMode::Shallow, Vec::<(&str, AttrValue)>::new()).unwrap();
        copy.base().positions_mut().add_point(Vector3::ONE, 2.0).unwrap();
        assert_eq!(original.base().positions().len(), 3);
        // Top-level fields are still separate.
        let mut copy = copy;
        copy.base_mut().position = Vector3::ONE;
        assert_eq!(original.base().position, Vector3::ZERO);
    }

    #[test]
    fn test_overrides_apply_after_copy() {
        let spring = Spring::new();
        let copy = spring
            .copy_with(
                CopyMode::Deep,
                [("bounce_force", AttrValue::Int(80)), ("color", Color::WHITE.into())],
            )
            .unwrap();
        assert_eq!(copy.bounce_force, 80.0);
        assert_eq!(copy.base.color, Color::WHITE);
        assert_eq!(spring.bounce_force, 50.0);
    }

    #[test]
    fn test_override_type_checked_at_assignment() {
        let block: Block = Spring::new().into();
        let err = block
            .copy(CopyMode::Deep, [("bounce_force", AttrValue::Str("high".into()))])
            .unwrap_err();
        assert!(matches!(
            err,
            Error::TypeMismatch { ref attribute, expected: "float", actual: "string" } if attribute == "bounce_force"
        ));

        let err = block.copy(CopyMode::Deep, [("nope", AttrValue::Bool(true))]).unwrap_err();
        assert!(matches!(err, Error::UnknownAttribute { .. }));
    }

    #[test]
    fn test_block_clone_detaches() {
        let block: Block = moving_block().into();
        let dup = block.clone();
        dup.base().positions_mut().clear();
        assert_eq!(block.base().positions().len(), 2);
    }

    #[test]
    fn test_block_copy_modes() {
        let block: Block = moving_block().into();
        let deep = block.copy(CopyMode::Deep, [("name", AttrValue::from("Deep"))]).unwrap();
        let shallow = block.copy(CopyMode::Shallow, [("name", AttrValue::from("Shallow"))]).unwrap();
        assert!(matches!(deep, Block::Primitive(_)));
        assert_eq!(shallow.name(), "Shallow");

        deep.base().positions_mut().clear();
        assert_eq!(block.base().positions().len(), 2);
        shallow.base().positions_mut().clear();
        assert!(block.base().positions().is_empty());
    }
}
