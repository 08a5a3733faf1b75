use super::{validate, CatalogStore};
use crate::error::Result;
use crate::model::{Category, Item};

/// Catalog held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    items: Vec<Item>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<Item>) -> Result<Self> {
        validate(&items)?;
        Ok(Self { items })
    }

    /// The catalog shipped with the page: four pastry items followed by four
    /// gourmet dishes.
    pub fn reference() -> Self {
        Self {
            items: reference_items(),
        }
    }
}

impl CatalogStore for InMemoryCatalog {
    fn items(&self) -> &[Item] {
        &self.items
    }
}

fn reference_items() -> Vec<Item> {
    vec![
        Item::new(
            "tarta-frutos",
            Category::Reposteria,
            "Tarta de frutos rojos",
            "Base de galleta, crema suave y topping de frutos rojos brillantes.",
            38.0,
            &["popular", "premium"],
            "images/reposteria/tarta-frutos-rojos.svg",
        ),
        Item::new(
            "cheesecake-limon",
            Category::Reposteria,
            "Cheesecake de limón",
            "Cremosa, cítrica y ligera. Perfecta para café o celebración.",
            32.0,
            &["popular"],
            "images/reposteria/cheesecake-limon.svg",
        ),
        Item::new(
            "cupcakes-vainilla",
            Category::Reposteria,
            "Cupcakes de vainilla",
            "12 unidades, crema sedosa y decoración lista para regalar.",
            28.0,
            &["popular"],
            "images/reposteria/cupcakes-vainilla.svg",
        ),
        Item::new(
            "croissant-almendra",
            Category::Reposteria,
            "Croissant de almendra",
            "Hojaldre dorado, almendra tostada y toque de azúcar glass.",
            9.0,
            &["premium"],
            "images/reposteria/croissant-almendra.svg",
        ),
        Item::new(
            "ensalada-burrata",
            Category::Gourmet,
            "Ensalada burrata",
            "Tomates, albahaca, aceite de oliva y burrata cremosa.",
            26.0,
            &["veg", "popular"],
            "images/gourmet/ensalada-burrata.svg",
        ),
        Item::new(
            "salmon-citricos",
            Category::Gourmet,
            "Salmón a los cítricos",
            "Sellado perfecto con salsa cítrica y guarnición fresca.",
            42.0,
            &["premium"],
            "images/gourmet/salmon-citricos.svg",
        ),
        Item::new(
            "risotto-setas",
            Category::Gourmet,
            "Risotto de setas",
            "Cremoso, con setas mixtas y toque de parmesano.",
            34.0,
            &["veg", "popular"],
            "images/gourmet/risotto-setas.svg",
        ),
        Item::new(
            "postre-maridaje",
            Category::Gourmet,
            "Postre + maridaje",
            "Dulce de autor con bebida sugerida para cerrar con broche de oro.",
            29.0,
            &["premium", "popular"],
            "images/gourmet/postre-maridaje.svg",
        ),
    ]
}
