use std::{fmt, mem};

use ash::vk;
use bytemuck::{Pod, Zeroable};

use crate::{Extent2d, Extent3d, Offset2d, Offset3d};

/// A two-dimensional subregion, laid out exactly like `VkRect2D`.
///
/// No validation is performed on construction, negative extents included.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Pod, Zeroable)]
pub struct Rect2d {
    pub offset: Offset2d,
    pub extent: Extent2d,
}

impl Rect2d {
    pub const ZERO: Self = Self::new(Offset2d::ZERO, Extent2d::ZERO);

    pub const fn new(offset: Offset2d, extent: Extent2d) -> Self {
        Self { offset, extent }
    }

    pub const fn from_coords(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self::new(Offset2d::new(x, y), Extent2d::new(width, height))
    }

    pub const fn is_empty(&self) -> bool {
        self.extent.is_empty()
    }

    /// Exclusive far corner, `offset + extent`, or `None` if it overflows.
    pub const fn end(&self) -> Option<Offset2d> {
        match (
            self.offset.x.checked_add(self.extent.width),
            self.offset.y.checked_add(self.extent.height),
        ) {
            (Some(x), Some(y)) => Some(Offset2d::new(x, y)),
            _ => None,
        }
    }
}

impl From<Extent2d> for Rect2d {
    fn from(extent: Extent2d) -> Self {
        Self {
            offset: Offset2d::ZERO,
            extent,
        }
    }
}

impl fmt::Display for Rect2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.extent, self.offset)
    }
}

impl From<Rect2d> for vk::Rect2D {
    fn from(rect: Rect2d) -> Self {
        vk::Rect2D {
            offset: rect.offset.into(),
            extent: rect.extent.into(),
        }
    }
}

impl From<vk::Rect2D> for Rect2d {
    fn from(rect: vk::Rect2D) -> Self {
        Self::new(rect.offset.into(), rect.extent.into())
    }
}

/// A three-dimensional subregion: an [`Offset3d`] followed by an [`Extent3d`].
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Pod, Zeroable)]
pub struct Rect3d {
    pub offset: Offset3d,
    pub extent: Extent3d,
}

impl Rect3d {
    pub const ZERO: Self = Self::new(Offset3d::ZERO, Extent3d::ZERO);

    pub const fn new(offset: Offset3d, extent: Extent3d) -> Self {
        Self { offset, extent }
    }

    pub const fn from_coords(
        x: i32,
        y: i32,
        z: i32,
        width: i32,
        height: i32,
        depth: i32,
    ) -> Self {
        Self::new(
            Offset3d::new(x, y, z),
            Extent3d::new(width, height, depth),
        )
    }

    pub const fn is_empty(&self) -> bool {
        self.extent.is_empty()
    }

    /// Project onto the xy plane.
    pub const fn to_2d(self) -> Rect2d {
        Rect2d {
            offset: self.offset.to_2d(),
            extent: self.extent.to_2d(),
        }
    }
}

impl From<Extent3d> for Rect3d {
    fn from(extent: Extent3d) -> Self {
        Self {
            offset: Offset3d::ZERO,
            extent,
        }
    }
}

impl fmt::Display for Rect3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at {}", self.extent, self.offset)
    }
}

const _: () = {
    assert!(mem::size_of::<Rect2d>() == 16);
    assert!(mem::size_of::<Rect3d>() == 24);
    assert!(mem::align_of::<Rect2d>() == 4);
    assert!(mem::align_of::<Rect3d>() == 4);

    assert!(mem::size_of::<Rect2d>() == mem::size_of::<vk::Rect2D>());
    assert!(mem::align_of::<Rect2d>() == mem::align_of::<vk::Rect2D>());
    assert!(mem::offset_of!(Rect2d, offset) == mem::offset_of!(vk::Rect2D, offset));
    assert!(mem::offset_of!(Rect2d, extent) == mem::offset_of!(vk::Rect2D, extent));
};
