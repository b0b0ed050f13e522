use crate::{gpu, BoundingBox};

pub trait TriangleExt {
    fn bounds(&self) -> BoundingBox;
}

impl TriangleExt for gpu::Triangle {
    fn bounds(&self) -> BoundingBox {
        BoundingBox::new(self.min(), self.max())
    }
}
