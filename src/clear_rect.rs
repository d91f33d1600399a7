use std::{mem, slice};

use ash::vk;
use bytemuck::{Pod, Zeroable};

use crate::{Rect2d, ValidationError, validation::is_validation_enabled};

/// A region of a layered attachment to be cleared, laid out exactly like
/// `VkClearRect`.
///
/// Fields are stored as given. [`ClearRect::validate`] checks them against
/// the preconditions of `vkCmdClearAttachments` on request.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Pod, Zeroable)]
pub struct ClearRect {
    pub rect: Rect2d,
    pub base_array_layer: i32,
    pub layer_count: i32,
}

impl ClearRect {
    pub const fn new(rect: Rect2d, base_array_layer: i32, layer_count: i32) -> Self {
        Self {
            rect,
            base_array_layer,
            layer_count,
        }
    }

    /// View a slice of clear rects as the Vulkan structures they are
    /// layout-identical to, without copying.
    pub fn as_raw_slice(rects: &[ClearRect]) -> &[vk::ClearRect] {
        // SAFETY: both types are `repr(C)` with the same field order, sizes
        // and alignment, checked below at compile time. Every bit pattern is
        // valid for both.
        unsafe { slice::from_raw_parts(rects.as_ptr().cast(), rects.len()) }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_validation_enabled() {
            tracing::trace!(clear_rect = ?self, "Skipping clear rect validation");
            return Ok(());
        }

        let result = self.validate_inner();

        if let Err(ref err) = result {
            tracing::debug!(clear_rect = ?self, "Rejected clear rect: {}", err);
        }

        result
    }

    fn validate_inner(&self) -> Result<(), ValidationError> {
        let extent = self.rect.extent;

        if extent.width == 0 {
            return Err(ValidationError {
                context: "rect.extent.width".into(),
                problem: "must be greater than 0".into(),
                vuids: &["VUID-vkCmdClearAttachments-rect-02682"],
            });
        }

        if extent.height == 0 {
            return Err(ValidationError {
                context: "rect.extent.height".into(),
                problem: "must be greater than 0".into(),
                vuids: &["VUID-vkCmdClearAttachments-rect-02683"],
            });
        }

        // negative sizes become huge unsigned ones on the Vulkan side
        if extent.width < 0 || extent.height < 0 {
            return Err(ValidationError {
                context: "rect.extent".into(),
                problem: "is negative, which as uint32_t exceeds any render area".into(),
                vuids: &["VUID-vkCmdClearAttachments-pRects-00016"],
            });
        }

        if self.layer_count == 0 {
            return Err(ValidationError {
                context: "layer_count".into(),
                problem: "must not be 0".into(),
                vuids: &["VUID-vkCmdClearAttachments-layerCount-01934"],
            });
        }

        if self.layer_count as u32 == vk::REMAINING_ARRAY_LAYERS {
            return Err(ValidationError {
                context: "layer_count".into(),
                problem: "must not be VK_REMAINING_ARRAY_LAYERS".into(),
                vuids: &["VUID-vkCmdClearAttachments-pRects-06937"],
            });
        }

        if (self.base_array_layer as u32)
            .checked_add(self.layer_count as u32)
            .is_none()
        {
            return Err(ValidationError {
                context: "base_array_layer + layer_count".into(),
                problem: "overflows uint32_t, so no attachment contains the layer range".into(),
                vuids: &["VUID-vkCmdClearAttachments-pRects-06937"],
            });
        }

        Ok(())
    }
}

impl From<ClearRect> for vk::ClearRect {
    fn from(rect: ClearRect) -> Self {
        vk::ClearRect {
            rect: rect.rect.into(),
            base_array_layer: rect.base_array_layer as u32,
            layer_count: rect.layer_count as u32,
        }
    }
}

impl From<vk::ClearRect> for ClearRect {
    fn from(rect: vk::ClearRect) -> Self {
        Self::new(
            rect.rect.into(),
            rect.base_array_layer as i32,
            rect.layer_count as i32,
        )
    }
}

const _: () = {
    assert!(mem::size_of::<ClearRect>() == 24);
    assert!(mem::align_of::<ClearRect>() == 4);

    assert!(mem::size_of::<ClearRect>() == mem::size_of::<vk::ClearRect>());
    assert!(mem::align_of::<ClearRect>() == mem::align_of::<vk::ClearRect>());
    assert!(mem::offset_of!(ClearRect, rect) == mem::offset_of!(vk::ClearRect, rect));
    assert!(
        mem::offset_of!(ClearRect, base_array_layer)
            == mem::offset_of!(vk::ClearRect, base_array_layer)
    );
    assert!(
        mem::offset_of!(ClearRect, layer_count) == mem::offset_of!(vk::ClearRect, layer_count)
    );
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Extent2d;

    #[test]
    fn fields_are_stored_verbatim() {
        let clear = ClearRect::new(Rect2d::from_coords(0, 0, 1, 1), 2, 3);

        assert_eq!(clear.rect, Rect2d::from_coords(0, 0, 1, 1));
        assert_eq!(clear.base_array_layer, 2);
        assert_eq!(clear.layer_count, 3);

        let clear = ClearRect::new(Rect2d::ZERO, -1, 0);
        assert_eq!(clear.base_array_layer, -1);
        assert_eq!(clear.layer_count, 0);
    }

    #[test]
    fn raw_bytes_follow_field_order() {
        let clear = ClearRect::new(Rect2d::from_coords(1, 2, 3, 4), 5, 6);
        let bytes = bytemuck::bytes_of(&clear);
        assert_eq!(bytes.len(), 24);

        let fields: &[i32] = bytemuck::cast_slice(bytes);
        assert_eq!(fields, [1, 2, 3, 4, 5, 6]);

        let read_back: ClearRect = bytemuck::pod_read_unaligned(bytes);
        assert_eq!(read_back.rect, clear.rect);
        assert_eq!(read_back.base_array_layer, 5);
        assert_eq!(read_back.layer_count, 6);
    }

    #[test]
    fn field_offsets_match_vk() {
        assert_eq!(mem::offset_of!(ClearRect, rect), 0);
        assert_eq!(mem::offset_of!(ClearRect, base_array_layer), 16);
        assert_eq!(mem::offset_of!(ClearRect, layer_count), 20);

        assert_eq!(
            mem::offset_of!(ClearRect, base_array_layer),
            mem::offset_of!(vk::ClearRect, base_array_layer)
        );
        assert_eq!(
            mem::offset_of!(ClearRect, layer_count),
            mem::offset_of!(vk::ClearRect, layer_count)
        );
        assert_eq!(mem::size_of::<ClearRect>(), mem::size_of::<vk::ClearRect>());
    }

    #[test]
    fn raw_slice_matches_elements() {
        let rects = [
            ClearRect::new(Rect2d::from_coords(0, 0, 16, 16), 0, 1),
            ClearRect::new(Rect2d::from_coords(-8, 4, 32, 2), 3, 4),
        ];

        let raw = ClearRect::as_raw_slice(&rects);
        assert_eq!(raw.len(), rects.len());

        for (raw, rect) in raw.iter().zip(&rects) {
            let converted = vk::ClearRect::from(*rect);

            assert_eq!(Rect2d::from(raw.rect), Rect2d::from(converted.rect));
            assert_eq!(raw.base_array_layer, converted.base_array_layer);
            assert_eq!(raw.layer_count, converted.layer_count);
        }

        assert!(ClearRect::as_raw_slice(&[]).is_empty());
    }

    #[test]
    fn vk_round_trip() {
        let clear = ClearRect::new(Rect2d::from_coords(1, 2, 3, 4), -1, 7);
        let raw = vk::ClearRect::from(clear);

        assert_eq!(raw.base_array_layer, u32::MAX);
        assert_eq!(raw.layer_count, 7);

        let back = ClearRect::from(raw);
        assert_eq!(back.rect, clear.rect);
        assert_eq!(back.base_array_layer, -1);
        assert_eq!(back.layer_count, 7);
    }

    #[test]
    fn construction_does_not_validate() {
        let clear = ClearRect::new(Rect2d::from_coords(0, 0, -1, -1), -5, 0);
        assert_eq!(clear.layer_count, 0);
    }

    #[cfg(not(feature = "unsafe-disable-validation"))]
    #[test]
    fn validate_accepts_well_formed_rect() {
        let clear = ClearRect::new(Rect2d::from(Extent2d::new(64, 64)), 0, 1);
        assert!(clear.validate().is_ok());
    }

    #[cfg(not(feature = "unsafe-disable-validation"))]
    #[test]
    fn validate_reports_vuids() {
        let cases = [
            (
                ClearRect::new(Rect2d::from_coords(0, 0, 0, 1), 0, 1),
                "VUID-vkCmdClearAttachments-rect-02682",
            ),
            (
                ClearRect::new(Rect2d::from_coords(0, 0, 1, 0), 0, 1),
                "VUID-vkCmdClearAttachments-rect-02683",
            ),
            (
                ClearRect::new(Rect2d::from_coords(0, 0, -4, 1), 0, 1),
                "VUID-vkCmdClearAttachments-pRects-00016",
            ),
            (
                ClearRect::new(Rect2d::from_coords(0, 0, 1, -1), 0, 1),
                "VUID-vkCmdClearAttachments-pRects-00016",
            ),
            (
                ClearRect::new(Rect2d::from_coords(0, 0, 1, 1), 0, 0),
                "VUID-vkCmdClearAttachments-layerCount-01934",
            ),
            (
                ClearRect::new(Rect2d::from_coords(0, 0, 1, 1), 0, -1),
                "VUID-vkCmdClearAttachments-pRects-06937",
            ),
            (
                ClearRect::new(Rect2d::from_coords(0, 0, 1, 1), 0, -2),
                "VUID-vkCmdClearAttachments-pRects-06937",
            ),
            (
                ClearRect::new(Rect2d::from_coords(0, 0, 1, 1), -1, 1),
                "VUID-vkCmdClearAttachments-pRects-06937",
            ),
        ];

        for (clear, vuid) in cases {
            let err = clear.validate().unwrap_err();
            assert_eq!(err.vuids, [vuid]);
        }
    }

    #[cfg(not(feature = "unsafe-disable-validation"))]
    #[test]
    fn validate_accepts_high_layer_range() {
        let clear = ClearRect::new(Rect2d::from_coords(-8, -8, 16, 16), 1 << 30, 1 << 30);
        assert!(clear.validate().is_ok());
    }

    #[cfg(feature = "unsafe-disable-validation")]
    #[test]
    fn validate_is_skipped() {
        let clear = ClearRect::new(Rect2d::ZERO, 0, 0);
        assert!(clear.validate().is_ok());
    }
}
