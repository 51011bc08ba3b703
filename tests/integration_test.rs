// Integration tests for Tembea
use std::io::Write;
use tembea::{Catalog, Error, Recommender, RecommenderConfig, DEFAULT_TOWN_RECOMMENDATIONS};
use tempfile::NamedTempFile;

const DATASET: &str = "\
name,category,website,rating,phone,locationString,average_price,town,cuisine,features
Carnivore,restaurant,https://carnivore.example,4.5,0700000001,\"Langata Road, Nairobi\",2500,Nairobi,barbecue,nyama choma outdoor seating
Java House,restaurant,https://javahouse.example,4.5,0700000002,\"Westlands, Nairobi\",800,Nairobi,cafe,coffee breakfast free wifi
Norfolk Hotel,hotel,https://norfolk.example,4.7,0700000003,\"Harry Thuku Road, Nairobi\",30000,nairobi,,swimming pool spa garden
Tamarind Dhow,restaurant,,4.2,,\"Mombasa\",4000,Mombasa,seafood,dhow cruise sunset seafood
Serena Beach Resort,hotel,https://serena.example,4.6,0700000004,\"Shanzu, Mombasa\",25000,Shanzu,,beach swimming pool spa
Kahawa Cafe,restaurant,,,,\"Kisumu\",,Kisumu,cafe,
Lake Hotel,hotel,,3.9,,\"Kisumu\",9000,KISUMU,,lake view
";

fn write_dataset(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn recommender() -> Recommender {
    let file = write_dataset(DATASET);
    Recommender::from_csv(file.path(), RecommenderConfig::default()).unwrap()
}

#[test]
fn test_load_and_combine_features() {
    let file = write_dataset(DATASET);
    let catalog = Catalog::from_path(file.path()).unwrap();
    assert_eq!(catalog.len(), 7);

    for item in catalog.iter() {
        let expected = [
            item.features.as_str(),
            item.cuisine.as_str(),
            item.town.as_str(),
            item.name.as_str(),
            item.category.as_str(),
        ]
        .join(" ");
        assert_eq!(item.combined_features, expected);
    }

    let kahawa = catalog.get(5).unwrap();
    assert_eq!(kahawa.combined_features, " cafe Kisumu Kahawa Cafe restaurant");
    assert_eq!(kahawa.rating, None);
}

#[test]
fn test_missing_column_is_fatal() {
    let file = write_dataset("name,category,town\nCarnivore,restaurant,Nairobi\n");
    let result = Recommender::from_csv(file.path(), RecommenderConfig::default());
    assert!(matches!(result, Err(Error::MissingColumns(_))));
}

#[test]
fn test_missing_dataset_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let result = Recommender::from_csv(dir.path().join("final.csv"), RecommenderConfig::default());
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_empty_dataset_is_fatal() {
    let header = DATASET.lines().next().unwrap();
    let file = write_dataset(&format!("{}\n", header));
    let result = Recommender::from_csv(file.path(), RecommenderConfig::default());
    assert!(matches!(result, Err(Error::EmptyCorpus)));
}

#[test]
fn test_similarity_query_ordering() {
    let rec = recommender();
    let results = rec.recommend_hotels_restaurants("swimming pool spa", 5);

    assert!(results.len() <= 5);
    assert_eq!(results.len(), 5);
    for pair in results.windows(2) {
        assert!(pair[0].distance <= pair[1].distance);
    }
    let top: Vec<&str> = results.iter().take(2).map(|r| r.name.as_str()).collect();
    assert!(top.contains(&"Norfolk Hotel"));
    assert!(top.contains(&"Serena Beach Resort"));
}

#[test]
fn test_similarity_query_deterministic() {
    let rec = recommender();
    let first = rec.recommend_hotels_restaurants("coffee wifi nairobi", 5);
    let second = rec.recommend_hotels_restaurants("coffee wifi nairobi", 5);
    assert_eq!(first, second);
    assert_eq!(first[0].name, "Java House");
}

#[test]
fn test_similarity_round_trip() {
    let rec = recommender();
    for (idx, item) in rec.catalog().iter().enumerate() {
        let results = rec.recommend_hotels_restaurants(&item.combined_features, 1);
        assert_eq!(results.len(), 1, "row {}", idx);
        assert_eq!(results[0].name, item.name);
        assert!(results[0].distance < 1e-5);
    }
}

#[test]
fn test_similarity_query_capped_at_neighbors() {
    let file = write_dataset(DATASET);
    let rec = Recommender::from_csv(file.path(), RecommenderConfig { n_neighbors: 3 }).unwrap();
    assert_eq!(rec.n_neighbors(), 3);
    assert_eq!(rec.recommend_hotels_restaurants("hotel", 10).len(), 3);
}

#[test]
fn test_similarity_query_empty_input() {
    let rec = recommender();
    let results = rec.recommend_hotels_restaurants("", 5);
    assert_eq!(results.len(), 5);
    assert!(results.iter().all(|r| (r.distance - 1.0).abs() < 1e-6));
}

#[test]
fn test_town_query() {
    let rec = recommender();
    let results = rec.recommend_town_hotels("Nairobi", 10).unwrap();
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Norfolk Hotel", "Java House", "Carnivore"]);
    assert!(results.iter().all(|r| r.town.to_lowercase() == "nairobi"));
}

#[test]
fn test_town_query_price_tiebreak() {
    let rec = recommender();
    let results = rec.recommend_town_hotels("nairobi", 10).unwrap();
    // equal 4.5 ratings: cheaper first
    assert_eq!(results[1].average_price, Some(800.0));
    assert_eq!(results[2].average_price, Some(2500.0));
}

#[test]
fn test_town_query_missing_rating_last() {
    let rec = recommender();
    let results = rec.recommend_town_hotels("kisumu", 10).unwrap();
    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Lake Hotel", "Kahawa Cafe"]);
}

#[test]
fn test_town_query_limit_and_absent() {
    let rec = recommender();
    assert_eq!(rec.recommend_town_hotels("NAIROBI", 1).unwrap().len(), 1);
    assert!(rec.recommend_town_hotels("Atlantis", 10).is_none());
}

#[test]
fn test_town_query_default_cap() {
    let rows: String = (0..40)
        .map(|i| format!("Place {i},hotel,,{},,,,Malindi,,beach\n", i % 5))
        .collect();
    let header = DATASET.lines().next().unwrap();
    let file = write_dataset(&format!("{header}\n{rows}"));
    let rec = Recommender::from_csv(file.path(), RecommenderConfig::default()).unwrap();

    let results = rec.recommend_town_hotels("malindi", DEFAULT_TOWN_RECOMMENDATIONS).unwrap();
    assert_eq!(results.len(), DEFAULT_TOWN_RECOMMENDATIONS);
    assert!(results.iter().all(|r| r.rating.is_some()));
    assert_eq!(results[0].rating, Some(4.0));
}

#[test]
fn test_shared_across_threads() {
    let rec = std::sync::Arc::new(recommender());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let rec = rec.clone();
            std::thread::spawn(move || rec.recommend_hotels_restaurants("beach pool", 3))
        })
        .collect();

    let expected = rec.recommend_hotels_restaurants("beach pool", 3);
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
