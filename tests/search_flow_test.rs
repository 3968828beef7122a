use optativas::{CatalogEngine, CatalogError, JsonCatalogStore};
use tempfile::TempDir;

const COURSES_JSON: &str = r#"[
    {
        "nombre": "Robótica Educativa",
        "profesor": "García",
        "descripcion": "robotics with mobile robots",
        "plazas": 20,
        "relacionadas": ["electronics"]
    },
    {
        "nombre": "Pintura",
        "profesor": "Jiménez",
        "descripcion": "oil painting on canvas",
        "plazas": 15,
        "relacionadas": ["art"]
    },
    {
        "nombre": "Coro",
        "profesor": "Ortega",
        "descripcion": "choir singing",
        "plazas": -1,
        "relacionadas": ["music"]
    }
]"#;

fn setup(dir: &TempDir) -> CatalogEngine<JsonCatalogStore> {
    std::fs::write(dir.path().join("optativas.json"), COURSES_JSON).unwrap();
    CatalogEngine::new(JsonCatalogStore::with_paths(
        dir.path().join("optativas.json"),
        dir.path().join("estudiantes.json"),
    ))
}

#[tokio::test]
async fn literal_match_ranks_first_and_only() {
    let dir = TempDir::new().unwrap();
    let engine = setup(&dir);

    let results = engine.search("robotics").await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "Robótica Educativa");
}

#[tokio::test]
async fn blank_query_is_an_error_not_an_empty_result() {
    let dir = TempDir::new().unwrap();
    let engine = setup(&dir);

    let err = engine.search("   ").await.unwrap_err();
    assert!(matches!(err, CatalogError::EmptyQuery));
}

#[tokio::test]
async fn exclusion_removes_matching_courses() {
    let dir = TempDir::new().unwrap();
    let engine = setup(&dir);

    let results = engine.search("singing painting !robotics").await.unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|c| c.name != "Robótica Educativa"));
}

#[tokio::test]
async fn exclusion_only_query_yields_empty_ok() {
    let dir = TempDir::new().unwrap();
    let engine = setup(&dir);

    let results = engine.search("!robotics").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn missing_catalog_file_is_just_an_empty_catalog() {
    let dir = TempDir::new().unwrap();
    let engine = CatalogEngine::new(JsonCatalogStore::with_paths(
        dir.path().join("nope.json"),
        dir.path().join("nope2.json"),
    ));
    let results = engine.search("anything").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn corrupt_catalog_surfaces_as_unavailable() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("optativas.json"), "{broken").unwrap();
    let engine = CatalogEngine::new(JsonCatalogStore::with_paths(
        dir.path().join("optativas.json"),
        dir.path().join("estudiantes.json"),
    ));
    let err = engine.search("anything").await.unwrap_err();
    assert!(matches!(err, CatalogError::CatalogUnavailable { .. }));
}
