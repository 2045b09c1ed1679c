use super::*;

fn row(id: &str, rating: Option<&str>, comment: Option<&str>) -> ReviewRow {
    ReviewRow {
        food_item_id: id.to_string(),
        rating: rating.map(str::to_string),
        comment: comment.map(str::to_string),
    }
}

#[test]
fn rating_form_requires_a_checked_radio() {
    let form = RatingForm {
        rating: None,
        review: Some("nice".to_string()),
    };
    assert_eq!(form.collect(), Err(ValidationError::MissingRating));
}

#[test]
fn rating_form_trims_review_and_defaults_missing_textarea() {
    let form = RatingForm {
        rating: Some("4".to_string()),
        review: Some("  Great service  ".to_string()),
    };
    assert_eq!(
        form.collect().expect("submission"),
        OrderRatingSubmission::new(Rating(4), "Great service")
    );

    let no_textarea = RatingForm {
        rating: Some("3".to_string()),
        review: None,
    };
    assert_eq!(no_textarea.collect().expect("submission").review, "");
}

#[test]
fn review_form_skips_unrated_rows_in_order() {
    let form = ReviewForm {
        rows: vec![
            row("A", Some("5"), Some(" Tasty ")),
            row("B", None, Some("ignored")),
            row("C", Some("2"), None),
        ],
    };
    let batch = form.collect().expect("batch");
    let ids: Vec<_> = batch
        .reviews()
        .iter()
        .map(|review| review.food_item_id.as_str())
        .collect();
    assert_eq!(ids, ["A", "C"]);
    assert_eq!(batch.reviews()[0].comment, "Tasty");
    assert_eq!(batch.reviews()[1].comment, "");
    assert_eq!(batch.reviews()[1].rating, Rating(2));
}

#[test]
fn review_form_with_no_rated_rows_is_empty() {
    let form = ReviewForm {
        rows: vec![row("A", None, Some("x")), row("B", None, None)],
    };
    assert_eq!(form.collect(), Err(ValidationError::EmptyReviewBatch));
    assert_eq!(
        ReviewForm::default().collect(),
        Err(ValidationError::EmptyReviewBatch)
    );
}

#[test]
fn review_form_rejects_non_numeric_rating() {
    let form = ReviewForm {
        rows: vec![row("A", Some("great"), None)],
    };
    assert!(matches!(
        form.collect(),
        Err(ValidationError::InvalidRating(_))
    ));
}

#[test]
fn parses_page_description() {
    let page = parse_page(
        r#"
order_number = "1024"

[modal]
rated = false

[rating_form]
rating = "4"
review = "Great service"

[[review_form.rows]]
food_item_id = "A"
rating = "5"
comment = "Tasty"

[[review_form.rows]]
food_item_id = "B"
"#,
    )
    .expect("page");

    assert_eq!(page.order_number(), Some(OrderNumber::new("1024")));
    assert_eq!(page.modal, Some(ModalElement { rated: false }));
    let rows = &page.review_form.as_ref().expect("review form").rows;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].rating, None);
}

#[test]
fn blank_order_number_counts_as_missing() {
    let page = parse_page("order_number = \"  \"").expect("page");
    assert_eq!(page.order_number(), None);
    assert_eq!(OrderDetailPage::default().order_number(), None);
}

#[test]
fn malformed_page_is_an_error() {
    assert!(parse_page("order_number = [").is_err());
}
