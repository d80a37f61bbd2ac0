use hula::{NoOpTickObserver, Skirt, SkirtConfig, Vec3, Y_RES};
use wasm_bindgen::prelude::*;

// ---- Hula Skirt Demo ----

#[wasm_bindgen]
pub struct SkirtDemo {
    skirt: Skirt<f32>,
    wireframe: bool,
}

#[wasm_bindgen]
impl SkirtDemo {
    #[wasm_bindgen(constructor)]
    pub fn new(girth: f32) -> Result<SkirtDemo, JsValue> {
        let config = SkirtConfig::new().with_girth(girth);
        let skirt = Skirt::new(config).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(SkirtDemo { skirt, wireframe: false })
    }

    pub fn tick(&mut self) {
        self.skirt.tick(&mut NoOpTickObserver);
    }

    /// Runs several ticks per animation frame.
    pub fn advance(&mut self, ticks: u32) {
        for _ in 0..ticks {
            self.skirt.tick(&mut NoOpTickObserver);
        }
    }

    pub fn increase_amplitude(&mut self) {
        self.skirt.increase_amplitude();
    }

    pub fn decrease_amplitude(&mut self) {
        self.skirt.decrease_amplitude();
    }

    pub fn increase_frequency(&mut self) {
        self.skirt.increase_frequency();
    }

    pub fn decrease_frequency(&mut self) {
        self.skirt.decrease_frequency();
    }

    pub fn set_planar_mode(&mut self) {
        self.skirt.set_planar_mode();
    }

    pub fn set_compound_mode(&mut self) {
        self.skirt.set_compound_mode();
    }

    pub fn toggle_wireframe(&mut self) {
        self.wireframe = !self.wireframe;
    }

    pub fn wireframe(&self) -> bool {
        self.wireframe
    }

    pub fn amplitude(&self) -> f32 {
        self.skirt.amplitude()
    }

    pub fn frequency(&self) -> f32 {
        self.skirt.frequency()
    }

    /// Camera distance hint.
    pub fn height(&self) -> f32 {
        self.skirt.height()
    }

    /// Number of bands; valid arguments to `strip_*` are `0..band_count()`.
    pub fn band_count(&self) -> usize {
        Y_RES - 1
    }

    /// Returns flat [x0, y0, z0, x1, y1, z1, ...] positions, row-major
    pub fn positions(&self) -> Vec<f32> {
        flatten(self.skirt.positions().iter().copied())
    }

    /// Returns flat unnormalized normals in the same layout as `positions`
    pub fn normals(&self) -> Vec<f32> {
        flatten(self.skirt.normals().iter().copied())
    }

    /// Returns flat strip positions for the band below `row`; empty past the last band
    pub fn strip_positions(&self, row: usize) -> Vec<f32> {
        match self.skirt.strip(row) {
            Some(strip) => flatten(strip.map(|v| v.position)),
            None => Vec::new(),
        }
    }

    /// Returns flat strip normals for the band below `row`; empty past the last band
    pub fn strip_normals(&self, row: usize) -> Vec<f32> {
        match self.skirt.strip(row) {
            Some(strip) => flatten(strip.map(|v| v.normal)),
            None => Vec::new(),
        }
    }

    /// Returns flat [u0, v0, u1, v1, ...] texture coordinates for the band below `row`
    pub fn strip_tex_coords(&self, row: usize) -> Vec<f32> {
        let Some(strip) = self.skirt.strip(row) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity(strip.len() * 2);
        for v in strip {
            out.push(v.tex_coord.0);
            out.push(v.tex_coord.1);
        }
        out
    }
}

fn flatten(points: impl ExactSizeIterator<Item = Vec3<f32>>) -> Vec<f32> {
    let mut out = Vec::with_capacity(points.len() * 3);
    for p in points {
        out.push(p.x);
        out.push(p.y);
        out.push(p.z);
    }
    out
}
