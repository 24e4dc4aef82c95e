use crate::domain::catalog::entities::{
    AllergenCatalog, AllergenRule, DietCatalog, DietRule, IngredientDescriptor,
    IngredientQualityCatalog, Severity,
};

pub const REFERENCE_DATA_VERSION: &str = "2024.1";

fn terms(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn allergen(name: &str, keywords: &[&str], severity: Severity, description: &str) -> AllergenRule {
    AllergenRule {
        name: name.to_string(),
        keywords: terms(keywords),
        severity,
        description: description.to_string(),
    }
}

fn diet(name: &str, forbidden: &[&str], cautions: &[&str], high_carb: &[&str]) -> DietRule {
    DietRule {
        name: name.to_string(),
        forbidden: terms(forbidden),
        cautions: terms(cautions),
        high_carb: terms(high_carb),
    }
}

pub fn allergen_catalog() -> AllergenCatalog {
    AllergenCatalog {
        allergens: vec![
            allergen(
                "milk",
                &[
                    "milk", "dairy", "lactose", "whey", "casein", "cream", "butter", "cheese",
                    "yogurt",
                ],
                Severity::High,
                "Contains milk or dairy products",
            ),
            allergen(
                "eggs",
                &["egg", "albumin", "mayonnaise", "meringue", "lecithin"],
                Severity::High,
                "Contains eggs or egg products",
            ),
            allergen(
                "fish",
                &[
                    "fish", "anchovy", "bass", "catfish", "cod", "flounder", "grouper", "haddock",
                    "hake", "halibut", "herring", "mahi mahi", "perch", "pike", "pollock",
                    "salmon", "sardine", "sole", "snapper", "swordfish", "tilapia", "trout",
                    "tuna",
                ],
                Severity::High,
                "Contains fish",
            ),
            allergen(
                "shellfish",
                &[
                    "shellfish", "crab", "lobster", "shrimp", "prawn", "crawfish", "crayfish",
                ],
                Severity::High,
                "Contains shellfish",
            ),
            allergen(
                "tree nuts",
                &[
                    "almond",
                    "cashew",
                    "walnut",
                    "pecan",
                    "pistachio",
                    "macadamia",
                    "hazelnut",
                    "brazil nut",
                    "pine nut",
                ],
                Severity::High,
                "Contains tree nuts",
            ),
            allergen(
                "peanuts",
                &["peanut", "groundnut", "peanut butter", "peanut oil"],
                Severity::High,
                "Contains peanuts",
            ),
            allergen(
                "wheat",
                &[
                    "wheat",
                    "wheat flour",
                    "wheat starch",
                    "wheat gluten",
                    "bulgur",
                    "durum",
                    "semolina",
                    "spelt",
                ],
                Severity::High,
                "Contains wheat",
            ),
            allergen(
                "soybeans",
                &[
                    "soy",
                    "soybean",
                    "tofu",
                    "edamame",
                    "miso",
                    "tempeh",
                    "soy sauce",
                    "soy protein",
                ],
                Severity::High,
                "Contains soy",
            ),
            allergen(
                "sesame",
                &["sesame", "tahini", "sesame oil", "sesame seed"],
                Severity::Medium,
                "Contains sesame",
            ),
        ],
    }
}

pub fn diet_catalog() -> DietCatalog {
    DietCatalog {
        diets: vec![
            diet(
                "vegan",
                &[
                    "meat", "beef", "pork", "chicken", "fish", "seafood", "milk", "dairy",
                    "cheese", "butter", "cream", "yogurt", "eggs", "honey", "gelatin", "whey",
                    "casein", "lactose",
                ],
                &["may contain milk", "may contain eggs"],
                &[],
            ),
            diet(
                "vegetarian",
                &[
                    "meat",
                    "beef",
                    "pork",
                    "chicken",
                    "fish",
                    "seafood",
                    "gelatin",
                    "rennet",
                    "lard",
                    "animal fat",
                ],
                &["may contain fish"],
                &[],
            ),
            diet(
                "gluten-free",
                &[
                    "wheat",
                    "barley",
                    "rye",
                    "malt",
                    "gluten",
                    "wheat flour",
                    "wheat starch",
                    "triticale",
                ],
                &[
                    "may contain gluten",
                    "processed in facility that handles wheat",
                ],
                &[],
            ),
            diet(
                "dairy-free",
                &[
                    "milk", "dairy", "cheese", "butter", "cream", "yogurt", "whey", "casein",
                    "lactose",
                ],
                &["may contain milk"],
                &[],
            ),
            diet(
                "keto",
                &[],
                &["high in carbohydrates"],
                &[
                    "sugar", "flour", "bread", "rice", "pasta", "potato", "corn", "wheat", "oats",
                ],
            ),
            // Selectable but rule-free until a paleo table is curated.
            diet("paleo", &[], &[], &[]),
            diet(
                "halal",
                &[
                    "pork",
                    "lard",
                    "alcohol",
                    "wine",
                    "beer",
                    "gelatin (non-halal)",
                    "animal shortening",
                ],
                &["verify halal certification"],
                &[],
            ),
            diet(
                "kosher",
                &["pork", "shellfish", "mixing meat and dairy"],
                &["verify kosher certification"],
                &[],
            ),
        ],
    }
}

pub fn ingredient_quality_catalog() -> IngredientQualityCatalog {
    let descriptions = [
        ("water", "Essential hydration base"),
        ("sugar", "Provides sweetness and quick energy"),
        ("salt", "Enhances flavor and acts as preservative"),
        ("flour", "Carbohydrate base providing structure"),
        ("milk", "Good source of protein and calcium"),
        ("eggs", "High-quality protein and nutrients"),
        ("butter", "Natural fat source, adds richness"),
        ("oil", "Source of fats and flavor carrier"),
        ("olive oil", "Heart-healthy monounsaturated fat"),
        ("vinegar", "Adds acidity and preserves food"),
        ("cocoa", "Rich in antioxidants and minerals"),
        ("vanilla", "Natural flavoring agent"),
        ("whole grain", "High in fiber and nutrients"),
        ("honey", "Natural sweetener with antioxidants"),
        ("artificial", "Synthetic additive - check necessity"),
        ("preservative", "Extends shelf life artificially"),
        ("high fructose corn syrup", "Processed sweetener - limit intake"),
        ("hydrogenated", "Contains trans fats - avoid"),
        ("monosodium glutamate", "Flavor enhancer - some sensitivity"),
        ("aspartame", "Artificial sweetener"),
        ("nitrate", "Preservative - potential health concerns"),
        ("coloring", "Artificial color additive"),
    ];

    IngredientQualityCatalog {
        good: terms(&[
            "water",
            "salt",
            "sugar",
            "flour",
            "milk",
            "eggs",
            "butter",
            "oil",
            "olive oil",
            "vinegar",
            "lemon",
            "tomato",
            "onion",
            "garlic",
            "herbs",
            "spices",
            "vanilla",
            "cocoa",
            "chocolate",
            "fruit",
            "vegetable",
            "whole grain",
            "oat",
            "rice",
            "wheat",
            "corn",
            "honey",
            "yeast",
            "baking powder",
            "baking soda",
        ]),
        bad: terms(&[
            "artificial",
            "preservative",
            "coloring",
            "flavoring",
            "monosodium glutamate",
            "msg",
            "high fructose corn syrup",
            "hfcs",
            "trans fat",
            "hydrogenated",
            "partially hydrogenated",
            "nitrate",
            "nitrite",
            "aspartame",
            "sucralose",
            "acesulfame",
            "benzoate",
            "sulfate",
            "phosphate",
            "tbhq",
            "bha",
            "bht",
            "red 40",
            "yellow 5",
            "blue 1",
            "caramel color",
        ]),
        descriptions: descriptions
            .iter()
            .map(|(term, description)| IngredientDescriptor {
                term: term.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}
