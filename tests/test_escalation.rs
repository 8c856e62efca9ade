#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use recipe_import::fetch::{FetchResult, Fetcher};
    use recipe_import::{import_recipe_with, ImportError, ImportOptions, SparsePolicy};

    /// Fetcher stub returning a fixed document (or failing), counting calls.
    struct StubFetcher {
        body: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl StubFetcher {
        fn returning(body: &'static str) -> Self {
            Self {
                body: Some(body),
                calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                body: None,
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Fetcher for StubFetcher {
        async fn fetch(&self, _url: &str) -> FetchResult {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.body {
                Some(html) => Ok(html.to_string()),
                None => Err("connection refused".into()),
            }
        }
    }

    const SPARSE_HTML: &str = r#"
        <html><body>
            <h1>Thin Page</h1>
            <ul class="ingredients"><li>1 egg</li></ul>
            <ol class="instructions"><li>Cook it.</li></ol>
        </body></html>
    "#;

    const RICH_HTML: &str = r#"
        <html><body>
            <h1>Rendered Feast</h1>
            <ul class="ingredients">
                <li>3 eggs</li>
                <li>1 cup milk</li>
                <li>2 cups flour</li>
            </ul>
            <ol class="instructions">
                <li>Whisk the wet ingredients.</li>
                <li>Fold in the flour.</li>
                <li>Fry in batches.</li>
            </ol>
        </body></html>
    "#;

    const URL: &str = "https://example.com/recipe";

    #[tokio::test]
    async fn sparse_result_escalates_to_render() {
        let plain = StubFetcher::returning(SPARSE_HTML);
        let render = StubFetcher::returning(RICH_HTML);

        let recipe = import_recipe_with(&plain, &render, URL, ImportOptions::default())
            .await
            .unwrap();

        assert_eq!(plain.calls(), 1);
        assert_eq!(render.calls(), 1);
        assert_eq!(recipe.title, "Rendered Feast");
        assert_eq!(recipe.ingredients.len(), 3);
    }

    #[tokio::test]
    async fn sparse_result_kept_when_render_disallowed() {
        let plain = StubFetcher::returning(SPARSE_HTML);
        let render = StubFetcher::returning(RICH_HTML);
        let options = ImportOptions {
            allow_render: false,
            ..ImportOptions::default()
        };

        let recipe = import_recipe_with(&plain, &render, URL, options)
            .await
            .unwrap();

        assert_eq!(render.calls(), 0);
        assert_eq!(recipe.title, "Thin Page");
        assert_eq!(recipe.ingredients.len(), 1);
    }

    #[tokio::test]
    async fn full_result_never_escalates() {
        let plain = StubFetcher::returning(RICH_HTML);
        let render = StubFetcher::returning(SPARSE_HTML);

        let recipe = import_recipe_with(&plain, &render, URL, ImportOptions::default())
            .await
            .unwrap();

        assert_eq!(render.calls(), 0);
        assert_eq!(recipe.title, "Rendered Feast");
    }

    #[tokio::test]
    async fn fetch_failure_escalates_to_render() {
        let plain = StubFetcher::failing();
        let render = StubFetcher::returning(RICH_HTML);

        let recipe = import_recipe_with(&plain, &render, URL, ImportOptions::default())
            .await
            .unwrap();

        assert_eq!(render.calls(), 1);
        assert_eq!(recipe.title, "Rendered Feast");
    }

    #[tokio::test]
    async fn fetch_failure_without_render_is_an_error() {
        let plain = StubFetcher::failing();
        let render = StubFetcher::returning(RICH_HTML);
        let options = ImportOptions {
            allow_render: false,
            ..ImportOptions::default()
        };

        let result = import_recipe_with(&plain, &render, URL, options).await;

        assert!(matches!(result, Err(ImportError::Fetch(_))));
        assert_eq!(render.calls(), 0);
    }

    #[tokio::test]
    async fn both_tiers_failing_is_an_error() {
        let plain = StubFetcher::failing();
        let render = StubFetcher::failing();

        let result = import_recipe_with(&plain, &render, URL, ImportOptions::default()).await;

        assert!(matches!(result, Err(ImportError::Fetch(_))));
        assert_eq!(render.calls(), 1);
    }

    #[tokio::test]
    async fn render_failure_degrades_to_earlier_sparse_result() {
        let plain = StubFetcher::returning(SPARSE_HTML);
        let render = StubFetcher::failing();

        let recipe = import_recipe_with(&plain, &render, URL, ImportOptions::default())
            .await
            .unwrap();

        assert_eq!(render.calls(), 1);
        assert_eq!(recipe.title, "Thin Page");
    }

    #[tokio::test]
    async fn render_is_attempted_at_most_once() {
        // The rendered result is sparse too, but no second escalation runs.
        let plain = StubFetcher::returning(SPARSE_HTML);
        let render = StubFetcher::returning(SPARSE_HTML);

        let recipe = import_recipe_with(&plain, &render, URL, ImportOptions::default())
            .await
            .unwrap();

        assert_eq!(render.calls(), 1);
        assert_eq!(recipe.title, "Thin Page");
    }

    #[tokio::test]
    async fn placeholder_only_policy_tolerates_thin_results() {
        let plain = StubFetcher::returning(SPARSE_HTML);
        let render = StubFetcher::returning(RICH_HTML);
        let options = ImportOptions {
            sparse_policy: SparsePolicy::PlaceholderOnly,
            ..ImportOptions::default()
        };

        let recipe = import_recipe_with(&plain, &render, URL, options)
            .await
            .unwrap();

        // One real ingredient and one real step is enough under the
        // strict policy; no render call happens.
        assert_eq!(render.calls(), 0);
        assert_eq!(recipe.title, "Thin Page");
    }

    #[tokio::test]
    async fn placeholder_only_policy_escalates_empty_extractions() {
        let plain = StubFetcher::returning("<html><body><h1>Shell</h1></body></html>");
        let render = StubFetcher::returning(RICH_HTML);
        let options = ImportOptions {
            sparse_policy: SparsePolicy::PlaceholderOnly,
            ..ImportOptions::default()
        };

        let recipe = import_recipe_with(&plain, &render, URL, options)
            .await
            .unwrap();

        assert_eq!(render.calls(), 1);
        assert_eq!(recipe.title, "Rendered Feast");
    }
}
