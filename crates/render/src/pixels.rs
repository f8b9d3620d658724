//! Pixel buffers, panel rotation and RGB565 packing

use serde::{Deserialize, Serialize};

/// Row-major `0x00RRGGBB` pixels of a finished frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixels {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u32>,
}

impl Pixels {
    pub fn new(width: u32, height: u32, data: Vec<u32>) -> Self {
        debug_assert_eq!(data.len(), (width * height) as usize);
        Self {
            width,
            height,
            data,
        }
    }

    pub fn get(&self, x: u32, y: u32) -> u32 {
        self.data[(y * self.width + x) as usize]
    }

    /// Rotate clockwise, matching how the panel is mounted
    pub fn rotated(&self, rotation: Rotation) -> Pixels {
        let (w, h) = (self.width, self.height);
        match rotation {
            Rotation::Deg0 => self.clone(),
            Rotation::Deg180 => {
                let mut data = self.data.clone();
                data.reverse();
                Pixels::new(w, h, data)
            }
            Rotation::Deg90 | Rotation::Deg270 => {
                let mut data = Vec::with_capacity(self.data.len());
                // Output is h wide and w tall
                for oy in 0..w {
                    for ox in 0..h {
                        let (sx, sy) = if rotation == Rotation::Deg90 {
                            (oy, h - 1 - ox)
                        } else {
                            (w - 1 - oy, ox)
                        };
                        data.push(self.get(sx, sy));
                    }
                }
                Pixels::new(h, w, data)
            }
        }
    }

    /// Pack into little-endian RGB565 (or BGR565) bytes
    pub fn to_rgb565(&self, bgr: bool) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 2);
        for &pixel in &self.data {
            out.extend_from_slice(&pack_rgb565(pixel, bgr).to_le_bytes());
        }
        out
    }
}

/// Clockwise rotation in quarter turns
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Rotation {
    #[serde(rename = "0")]
    #[default]
    Deg0,
    #[serde(rename = "90")]
    Deg90,
    #[serde(rename = "180")]
    Deg180,
    #[serde(rename = "270")]
    Deg270,
}

pub fn pack_rgb565(pixel: u32, bgr: bool) -> u16 {
    let r = ((pixel >> 16) & 0xff) as u16;
    let g = ((pixel >> 8) & 0xff) as u16;
    let b = (pixel & 0xff) as u16;
    let (hi, lo) = if bgr { (b, r) } else { (r, b) };
    ((hi >> 3) << 11) | ((g >> 2) << 5) | (lo >> 3)
}
