use recipe_scraper::{extract_recipe, ScrapeConfig};

const SOURCE_URL: &str = "https://example.com/recipe";

fn page_with_json_ld(json_ld: &str) -> String {
    format!(
        r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Recipe Page</title>
            <script type="application/ld+json">
                {}
            </script>
        </head>
        <body>
            <h1>Recipe</h1>
        </body>
        </html>
        "#,
        json_ld
    )
}

#[test]
fn test_end_to_end_cake_page() {
    let html = r#"
        <!DOCTYPE html>
        <html>
        <head>
            <title>Cake | Some Blog</title>
            <meta property="og:image" content="https://example.com/cake.jpg">
            <script type="application/ld+json">
            {
                "@context": "https://schema.org",
                "@type": "Recipe",
                "recipeIngredient": ["200g sugar", "3 eggs"],
                "recipeInstructions": [
                    {"@type": "HowToStep", "text": "Mix."},
                    {"@type": "HowToStep", "text": "Bake."}
                ]
            }
            </script>
        </head>
        <body>
            <h1>Cake</h1>
        </body>
        </html>
    "#;

    let recipe = extract_recipe(html, SOURCE_URL, &ScrapeConfig::default()).unwrap();

    assert_eq!(recipe.name, "Cake");
    assert_eq!(recipe.ingredients, vec!["200g sugar", "3 eggs"]);
    assert_eq!(recipe.method, vec!["Mix.", "Bake."]);
    assert_eq!(recipe.image_url, "https://example.com/cake.jpg");
    assert_eq!(recipe.source_url, SOURCE_URL);
}

#[test]
fn test_structured_data_wins_over_selectors() {
    // The page also carries WPRM markup with different content; the
    // JSON-LD values must win and the selector pass must not run.
    let html = r#"
        <html>
        <head>
            <script type="application/ld+json">
            {
                "@type": "Recipe",
                "name": "Real Name",
                "recipeIngredient": ["from json-ld"],
                "recipeInstructions": "json-ld step"
            }
            </script>
        </head>
        <body>
            <h1>Markup Name</h1>
            <ul><li class="wprm-recipe-ingredient">from markup</li></ul>
            <div class="wprm-recipe-instruction">markup step</div>
        </body>
        </html>
    "#;

    let recipe = extract_recipe(html, SOURCE_URL, &ScrapeConfig::default()).unwrap();

    assert_eq!(recipe.name, "Real Name");
    assert_eq!(recipe.ingredients, vec!["from json-ld"]);
    assert_eq!(recipe.method, vec!["json-ld step"]);
}

#[test]
fn test_fields_merge_across_blocks_first_block_wins() {
    let html = r#"
        <html>
        <head>
            <script type="application/ld+json">
                {"@type": "Recipe", "name": "First Name"}
            </script>
            <script type="application/ld+json">
                {
                    "@type": "Recipe",
                    "name": "Second Name",
                    "recipeIngredient": ["1 onion", "2 carrots"]
                }
            </script>
        </head>
        <body></body>
        </html>
    "#;

    let recipe = extract_recipe(html, SOURCE_URL, &ScrapeConfig::default()).unwrap();

    // name was set by the first block and never overwritten; the second
    // block only filled the still-empty ingredients
    assert_eq!(recipe.name, "First Name");
    assert_eq!(recipe.ingredients, vec!["1 onion", "2 carrots"]);
}

#[test]
fn test_malformed_block_does_not_abort_the_scan() {
    let html = r#"
        <html>
        <head>
            <script type="application/ld+json">{this is not json</script>
            <script type="application/ld+json">
                {"@type": "Recipe", "name": "Still Found", "recipeIngredient": ["salt"]}
            </script>
        </head>
        <body></body>
        </html>
    "#;

    let recipe = extract_recipe(html, SOURCE_URL, &ScrapeConfig::default()).unwrap();
    assert_eq!(recipe.name, "Still Found");
    assert_eq!(recipe.ingredients, vec!["salt"]);
}

#[test]
fn test_ingredients_deduplicated_preserving_order() {
    let html = page_with_json_ld(
        r#"{
            "@type": "Recipe",
            "name": "Omelette",
            "recipeIngredient": ["2 eggs", "2 eggs", "1 cup flour"]
        }"#,
    );

    let recipe = extract_recipe(&html, SOURCE_URL, &ScrapeConfig::default()).unwrap();
    assert_eq!(recipe.ingredients, vec!["2 eggs", "1 cup flour"]);
}

#[test]
fn test_noisy_json_ld_ingredients_fall_through_to_markup() {
    // A broken site shoved its nav menu into recipeIngredient; the
    // classifier rejects it and the selector strategy supplies the list.
    let html = r#"
        <html>
        <head>
            <script type="application/ld+json">
            {
                "@type": "Recipe",
                "name": "Couscous",
                "recipeIngredient": ["דף הבית", "צור קשר", "חיפוש"]
            }
            </script>
        </head>
        <body>
            <div class="recipeIngredients">
                <ul>
                    <li>1 cup couscous</li>
                    <li>2 cups water</li>
                </ul>
            </div>
        </body>
        </html>
    "#;

    let recipe = extract_recipe(html, SOURCE_URL, &ScrapeConfig::default()).unwrap();
    assert_eq!(recipe.name, "Couscous");
    assert_eq!(recipe.ingredients, vec!["1 cup couscous", "2 cups water"]);
}

#[test]
fn test_instruction_sections_flattened_in_order() {
    let html = page_with_json_ld(
        r#"{
            "@type": "Recipe",
            "name": "Challah",
            "recipeInstructions": [
                {
                    "@type": "HowToSection",
                    "name": "Dough",
                    "itemListElement": [
                        {"@type": "HowToStep", "text": "Knead the dough."},
                        {"@type": "HowToStep", "text": "Let it rise."}
                    ]
                },
                {"@type": "HowToStep", "text": "Braid and bake."}
            ]
        }"#,
    );

    let recipe = extract_recipe(&html, SOURCE_URL, &ScrapeConfig::default()).unwrap();
    assert_eq!(
        recipe.method,
        vec!["Knead the dough.", "Let it rise.", "Braid and bake."]
    );
}

#[test]
fn test_extraction_is_idempotent() {
    let html = page_with_json_ld(
        r#"{
            "@type": "Recipe",
            "name": "Hummus",
            "recipeIngredient": ["chickpeas", "tahini"],
            "recipeInstructions": "Blend everything."
        }"#,
    );

    let config = ScrapeConfig::default();
    let first = extract_recipe(&html, SOURCE_URL, &config).unwrap();
    let second = extract_recipe(&html, SOURCE_URL, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_whole_page_without_recipe_stays_empty() {
    let html = r#"
        <html>
        <head><title>About us</title></head>
        <body><p>We write about food sometimes.</p></body>
        </html>
    "#;

    let recipe = extract_recipe(html, SOURCE_URL, &ScrapeConfig::default()).unwrap();
    assert_eq!(recipe.name, "About us");
    assert!(recipe.ingredients.is_empty());
    assert!(recipe.method.is_empty());
    assert!(recipe.image_url.is_empty());
}
