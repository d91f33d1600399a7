use std::{fmt, mem};

use ash::vk;
use bytemuck::{Pod, Zeroable};

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Pod, Zeroable)]
pub struct Offset2d {
    pub x: i32,
    pub y: i32,
}

impl Offset2d {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Offset2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<Offset2d> for vk::Offset2D {
    fn from(offset: Offset2d) -> Self {
        vk::Offset2D {
            x: offset.x,
            y: offset.y,
        }
    }
}

impl From<vk::Offset2D> for Offset2d {
    fn from(offset: vk::Offset2D) -> Self {
        Self::new(offset.x, offset.y)
    }
}

/// Size of a two-dimensional region.
///
/// Fields are signed so that any value a caller produces is carried through
/// unchanged. Converting to [`vk::Extent2D`] reinterprets the bits.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Pod, Zeroable)]
pub struct Extent2d {
    pub width: i32,
    pub height: i32,
}

impl Extent2d {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether the region covers no area, i.e. any axis is zero or negative.
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

impl fmt::Display for Extent2d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl From<Extent2d> for vk::Extent2D {
    fn from(extent: Extent2d) -> Self {
        vk::Extent2D {
            width: extent.width as u32,
            height: extent.height as u32,
        }
    }
}

impl From<vk::Extent2D> for Extent2d {
    fn from(extent: vk::Extent2D) -> Self {
        Self::new(extent.width as i32, extent.height as i32)
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Pod, Zeroable)]
pub struct Offset3d {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Offset3d {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub const fn to_2d(self) -> Offset2d {
        Offset2d {
            x: self.x,
            y: self.y,
        }
    }
}

impl fmt::Display for Offset3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<Offset3d> for vk::Offset3D {
    fn from(offset: Offset3d) -> Self {
        vk::Offset3D {
            x: offset.x,
            y: offset.y,
            z: offset.z,
        }
    }
}

impl From<vk::Offset3D> for Offset3d {
    fn from(offset: vk::Offset3D) -> Self {
        Self::new(offset.x, offset.y, offset.z)
    }
}

#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Pod, Zeroable)]
pub struct Extent3d {
    pub width: i32,
    pub height: i32,
    pub depth: i32,
}

impl Extent3d {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(width: i32, height: i32, depth: i32) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0 || self.depth <= 0
    }

    pub const fn to_2d(self) -> Extent2d {
        Extent2d {
            width: self.width,
            height: self.height,
        }
    }
}

impl fmt::Display for Extent3d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{}", self.width, self.height, self.depth)
    }
}

impl From<Extent3d> for vk::Extent3D {
    fn from(extent: Extent3d) -> Self {
        vk::Extent3D {
            width: extent.width as u32,
            height: extent.height as u32,
            depth: extent.depth as u32,
        }
    }
}

impl From<vk::Extent3D> for Extent3d {
    fn from(extent: vk::Extent3D) -> Self {
        Self::new(
            extent.width as i32,
            extent.height as i32,
            extent.depth as i32,
        )
    }
}

const _: () = {
    assert!(mem::size_of::<Offset2d>() == 8);
    assert!(mem::size_of::<Extent2d>() == 8);
    assert!(mem::size_of::<Offset3d>() == 12);
    assert!(mem::size_of::<Extent3d>() == 12);

    assert!(mem::size_of::<Offset2d>() == mem::size_of::<vk::Offset2D>());
    assert!(mem::size_of::<Extent2d>() == mem::size_of::<vk::Extent2D>());
    assert!(mem::size_of::<Offset3d>() == mem::size_of::<vk::Offset3D>());
    assert!(mem::size_of::<Extent3d>() == mem::size_of::<vk::Extent3D>());

    assert!(mem::align_of::<Offset2d>() == 4);
    assert!(mem::align_of::<Extent3d>() == 4);
};
