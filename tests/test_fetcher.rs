#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use recipe_import::fetch::{Fetcher, RequestFetcher};
    use recipe_import::{import_recipe_with, ImportOptions};

    #[tokio::test]
    async fn test_fetch_returns_body_on_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/recipe")
            .match_header("user-agent", Matcher::Regex("RecipeImporter".to_string()))
            .with_status(200)
            .with_body("<html><body><h1>Mock Meal</h1></body></html>")
            .create_async()
            .await;

        let fetcher = RequestFetcher::new(None);
        let html = fetcher
            .fetch(&format!("{}/recipe", server.url()))
            .await
            .unwrap();

        assert!(html.contains("Mock Meal"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_2xx_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/gone")
            .with_status(404)
            .with_body("not found")
            .create_async()
            .await;

        let fetcher = RequestFetcher::new(None);
        let result = fetcher.fetch(&format!("{}/gone", server.url())).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_connection_failure_is_an_error() {
        let fetcher = RequestFetcher::new(None);
        // Port 9 (discard) is not listening
        let result = fetcher.fetch("http://127.0.0.1:9/recipe").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_import_over_http_without_render() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/pancakes")
            .with_status(200)
            .with_body(
                r#"
                <html><body>
                    <h1>Fluffy Pancakes</h1>
                    <ul class="ingredients">
                        <li>2 eggs</li>
                        <li>1 cup flour</li>
                        <li>1 cup milk</li>
                    </ul>
                    <ol class="instructions">
                        <li>Whisk everything together.</li>
                        <li>Fry until golden.</li>
                    </ol>
                </body></html>
                "#,
            )
            .create_async()
            .await;

        let plain = RequestFetcher::new(None);
        // Render tier is never consulted here: rendering is disallowed
        // and the plain result is not sparse
        let render = RequestFetcher::new(None);
        let options = ImportOptions {
            allow_render: false,
            ..ImportOptions::default()
        };

        let recipe = import_recipe_with(
            &plain,
            &render,
            &format!("{}/pancakes", server.url()),
            options,
        )
        .await
        .unwrap();

        assert_eq!(recipe.title, "Fluffy Pancakes");
        assert_eq!(recipe.ingredients.len(), 3);
        assert_eq!(recipe.steps.len(), 2);
    }
}
