// src/routes/search.rs
//
// Placeholder search endpoints: echo the query and return fixed demo
// results until a real provider (Amadeus, Booking, ...) is plugged in.
use axum::Json;
use serde_json::{Value, json};

pub async fn search_flights_handler(Json(query): Json<Value>) -> Json<Value> {
    let mock = json!([
        { "provider": "DemoAir", "price": 300, "currency": "USD", "depart": "2026-01-01T06:30", "arrive": "2026-01-01T12:00", "id": "demo-1" },
        { "provider": "SampleWings", "price": 350, "currency": "USD", "depart": "2026-01-01T09:00", "arrive": "2026-01-01T15:00", "id": "demo-2" }
    ]);
    Json(json!({ "query": query, "results": mock }))
}

pub async fn search_hotels_handler(Json(query): Json<Value>) -> Json<Value> {
    let mock = json!([
        { "provider": "DemoHotel", "price_per_night": 80, "rating": 4.2, "id": "h-1" },
        { "provider": "SampleInn", "price_per_night": 60, "rating": 4.0, "id": "h-2" }
    ]);
    Json(json!({ "query": query, "results": mock }))
}
