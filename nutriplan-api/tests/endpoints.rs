use std::collections::HashSet;

use actix_web::{
    http::StatusCode,
    test::{self, TestRequest},
    web, App,
};
use nutriplan_api::{routes, SharedPlanner};
use nutriplan_model::{ChatReply, DietPlan, MealSlot};
use nutriplan_planner::{
    sampler::MockMealSampler, MealSampler, Planner, RandomSampler, SeededSampler,
};
use serde_json::{json, Value};

fn planner(sampler: impl MealSampler + 'static) -> web::Data<SharedPlanner> {
    let sampler: Box<dyn MealSampler> = Box::new(sampler);
    web::Data::new(Planner::new(sampler))
}

fn profile() -> Value {
    json!({
        "age": 30,
        "weight": 70,
        "height": 175,
        "gender": "male",
        "activity_level": "moderate",
        "goal": "maintain",
        "dietary_preferences": [],
        "allergies": [],
    })
}

macro_rules! service {
    ($planner:expr) => {
        test::init_service(
            App::new()
                .app_data($planner)
                .configure(routes::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn diet_plan_returns_full_plan() {
    let app = service!(planner(RandomSampler));
    let req = TestRequest::post()
        .uri("/diet-plan")
        .set_json(profile())
        .to_request();
    let plan: DietPlan = test::call_and_read_body_json(&app, req).await;

    assert_eq!(plan.daily_calories, 2628);
    assert_eq!(plan.macros.protein, 197.1);
    assert_eq!(plan.macros.carbs, 262.8);
    assert_eq!(plan.macros.fat, 87.6);
    for slot in [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner] {
        let meals = plan.meals_for(slot);
        assert_eq!(meals.len(), 3);
        assert_eq!(meals.iter().collect::<HashSet<_>>().len(), 3);
    }
}

#[actix_web::test]
async fn diet_plan_response_shape() {
    let mut sampler = MockMealSampler::new();
    sampler
        .expect_sample()
        .returning(|items, amount| items.iter().take(amount).cloned().collect());
    let app = service!(planner(sampler));

    let mut input = profile();
    input["allergies"] = json!(["eggs", "yogurt"]);
    input["dietary_preferences"] = json!(["fish", "salmon"]);
    let req = TestRequest::post()
        .uri("/diet-plan")
        .set_json(input)
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({
            "daily_calories": 2628,
            "macros": {"protein": 197.1, "carbs": 262.8, "fat": 87.6},
            "meals": {
                "breakfast": [
                    "Oatmeal with banana and honey",
                    "Protein smoothie with spinach and fruits",
                    "Overnight oats with almond milk and chia seeds",
                ],
                "lunch": [
                    "Grilled chicken salad with olive oil dressing",
                    "Quinoa bowl with roasted vegetables",
                    "Turkey and avocado sandwich on whole grain bread",
                ],
                "dinner": ["Baked salmon with roasted vegetables"],
            },
        })
    );
}

#[actix_web::test]
async fn diet_plan_reports_all_validation_errors() {
    let app = service!(planner(RandomSampler));
    let req = TestRequest::post()
        .uri("/diet-plan")
        .set_json(json!({"age": 121, "weight": "abc", "gender": "male"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Validation failed");
    let details: HashSet<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_str)
        .collect();
    assert_eq!(
        details,
        HashSet::from([
            "Missing required field: height",
            "Missing required field: activity_level",
            "Missing required field: goal",
            "Missing required field: dietary_preferences",
            "Missing required field: allergies",
            "Age must be between 1 and 120",
            "Weight must be a number",
        ])
    );
}

#[actix_web::test]
async fn diet_plan_rejects_missing_body() {
    let app = service!(planner(RandomSampler));
    for body in ["", "{}", "not json"] {
        let req = TestRequest::post()
            .uri("/diet-plan")
            .insert_header(("content-type", "application/json"))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body {:?}", body);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": "No data provided"}));
    }
}

#[actix_web::test]
async fn diet_plan_surfaces_computation_errors() {
    let app = service!(planner(RandomSampler));
    let mut input = profile();
    input["weight"] = json!(20);
    input["height"] = json!(50);
    input["age"] = json!(120);
    let req = TestRequest::post()
        .uri("/diet-plan")
        .set_json(input)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: Value = test::read_body_json(resp).await;
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Error getting meal recommendations:"), "{}", message);
    assert!(body.get("details").is_none());
}

#[actix_web::test]
async fn seeded_service_is_reproducible() {
    let app = service!(planner(SeededSampler::new(99)));
    let mut plans = Vec::new();
    for _ in 0..2 {
        let req = TestRequest::post()
            .uri("/diet-plan")
            .set_json(profile())
            .to_request();
        let plan: DietPlan = test::call_and_read_body_json(&app, req).await;
        plans.push(plan);
    }
    assert_eq!(plans[0], plans[1]);
}

#[actix_web::test]
async fn chat_echoes_message() {
    let app = service!(planner(RandomSampler));
    let req = TestRequest::post()
        .uri("/chat")
        .set_json(json!({"message": "  protein sources  "}))
        .to_request();
    let reply: ChatReply = test::call_and_read_body_json(&app, req).await;
    assert_eq!(
        reply,
        ChatReply {
            response: "I understand you're asking about: protein sources".to_owned(),
            sentiment: "neutral".to_owned(),
        }
    );
}

#[actix_web::test]
async fn chat_rejects_missing_and_empty_messages() {
    let app = service!(planner(RandomSampler));
    let test_data = [
        (json!({}), "No message provided"),
        (json!({"message": "   "}), "Empty message"),
    ];

    for (input, expected) in test_data {
        let req = TestRequest::post().uri("/chat").set_json(input).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"error": expected}));
    }
}
