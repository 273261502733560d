//! Product catalog endpoints, including the algorithm showcase routes.

use std::collections::HashMap;

use rust_decimal::Decimal;

use shopjoy_core::{CategoryId, ProductId};

use crate::Result;
use crate::http::ApiClient;
use crate::types::{
    AlgorithmBenchmark, AlgorithmRecommendations, NewProduct, Page, Product, ProductFilter,
    UpdateProduct,
};

impl ApiClient {
    /// `POST /products`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product> {
        self.post("/products", product).await
    }

    /// `GET /products/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_product(&self, id: ProductId) -> Result<Product> {
        self.get(&format!("/products/{id}")).await
    }

    /// `GET /products`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_products(&self) -> Result<Vec<Product>> {
        self.get("/products").await
    }

    /// `GET /products/active`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_active_products(&self) -> Result<Vec<Product>> {
        self.get("/products/active").await
    }

    /// `GET /products/category/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_products_by_category(&self, category: CategoryId) -> Result<Vec<Product>> {
        self.get(&format!("/products/category/{category}")).await
    }

    /// `GET /products/search?name=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn search_products(&self, name: &str) -> Result<Vec<Product>> {
        self.get_query("/products/search", &[("name", name.to_string())])
            .await
    }

    /// `GET /products/price-range?minPrice=&maxPrice=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_products_by_price_range(
        &self,
        min_price: Decimal,
        max_price: Decimal,
    ) -> Result<Vec<Product>> {
        self.get_query(
            "/products/price-range",
            &[
                ("minPrice", min_price.to_string()),
                ("maxPrice", max_price.to_string()),
            ],
        )
        .await
    }

    /// `PUT /products/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn update_product(&self, id: ProductId, update: &UpdateProduct) -> Result<Product> {
        self.put(&format!("/products/{id}"), update).await
    }

    /// `PATCH /products/{id}/price?newPrice=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn update_product_price(&self, id: ProductId, new_price: Decimal) -> Result<Product> {
        self.patch_query(
            &format!("/products/{id}/price"),
            &[("newPrice", new_price.to_string())],
        )
        .await
    }

    /// `PATCH /products/{id}/activate`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn activate_product(&self, id: ProductId) -> Result<Product> {
        self.patch(&format!("/products/{id}/activate")).await
    }

    /// `PATCH /products/{id}/deactivate`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn deactivate_product(&self, id: ProductId) -> Result<Product> {
        self.patch(&format!("/products/{id}/deactivate")).await
    }

    /// `DELETE /products/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn delete_product(&self, id: ProductId) -> Result<()> {
        self.delete(&format!("/products/{id}")).await
    }

    /// `GET /products/count`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn count_products(&self) -> Result<i64> {
        self.get("/products/count").await
    }

    /// `GET /products/count/category/{id}`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn count_products_by_category(&self, category: CategoryId) -> Result<i64> {
        self.get(&format!("/products/count/category/{category}"))
            .await
    }

    /// `GET /products/paginated?page=&size=&sortBy=&sortDirection=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_products_paginated(
        &self,
        page: i32,
        size: i32,
        sort_by: &str,
        sort_direction: &str,
    ) -> Result<Page<Product>> {
        self.get_query(
            "/products/paginated",
            &[
                ("page", page.to_string()),
                ("size", size.to_string()),
                ("sortBy", sort_by.to_string()),
                ("sortDirection", sort_direction.to_string()),
            ],
        )
        .await
    }

    /// `GET /products/search/paginated?term=&page=&size=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn search_products_paginated(
        &self,
        term: &str,
        page: i32,
        size: i32,
    ) -> Result<Page<Product>> {
        self.get_query(
            "/products/search/paginated",
            &[
                ("term", term.to_string()),
                ("page", page.to_string()),
                ("size", size.to_string()),
            ],
        )
        .await
    }

    /// `GET /products/filter` with any combination of filter fields.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn filter_products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        self.get_with("/products/filter", filter).await
    }

    /// `GET /products/sorted/quicksort?sortBy=&ascending=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_products_sorted_quicksort(
        &self,
        sort_by: &str,
        ascending: bool,
    ) -> Result<Vec<Product>> {
        self.get_query(
            "/products/sorted/quicksort",
            &[
                ("sortBy", sort_by.to_string()),
                ("ascending", ascending.to_string()),
            ],
        )
        .await
    }

    /// `GET /products/sorted/mergesort?sortBy=&ascending=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_products_sorted_mergesort(
        &self,
        sort_by: &str,
        ascending: bool,
    ) -> Result<Vec<Product>> {
        self.get_query(
            "/products/sorted/mergesort",
            &[
                ("sortBy", sort_by.to_string()),
                ("ascending", ascending.to_string()),
            ],
        )
        .await
    }

    /// `GET /products/sorted/{algorithm}?sortBy=&sortDirection=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_products_sorted_with(
        &self,
        algorithm: &str,
        sort_by: &str,
        sort_direction: &str,
    ) -> Result<Vec<Product>> {
        self.get_query(
            &format!("/products/sorted/{algorithm}"),
            &[
                ("sortBy", sort_by.to_string()),
                ("sortDirection", sort_direction.to_string()),
            ],
        )
        .await
    }

    /// `GET /products/{id}/binary-search`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn binary_search_product(&self, id: ProductId) -> Result<Product> {
        self.get(&format!("/products/{id}/binary-search")).await
    }

    /// `GET /products/algorithms/sort-comparison?datasetSize=`
    ///
    /// Benchmarks the backend's sorting algorithms over a synthetic dataset
    /// of the given size; keyed by algorithm name.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn compare_sort_algorithms(
        &self,
        dataset_size: u32,
    ) -> Result<HashMap<String, AlgorithmBenchmark>> {
        self.get_query(
            "/products/algorithms/sort-comparison",
            &[("datasetSize", dataset_size.to_string())],
        )
        .await
    }

    /// `GET /products/algorithms/search-comparison?datasetSize=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn compare_search_algorithms(
        &self,
        dataset_size: u32,
    ) -> Result<HashMap<String, AlgorithmBenchmark>> {
        self.get_query(
            "/products/algorithms/search-comparison",
            &[("datasetSize", dataset_size.to_string())],
        )
        .await
    }

    /// `GET /products/algorithms/recommendations?datasetSize=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_algorithm_recommendations(
        &self,
        dataset_size: u32,
    ) -> Result<AlgorithmRecommendations> {
        self.get_query(
            "/products/algorithms/recommendations",
            &[("datasetSize", dataset_size.to_string())],
        )
        .await
    }

    /// `GET /products/new-arrivals?limit=`
    ///
    /// # Errors
    ///
    /// Returns `ApiError` if the request fails or the backend rejects it.
    pub async fn get_new_arrivals(&self, limit: u32) -> Result<Vec<Product>> {
        self.get_query("/products/new-arrivals", &[("limit", limit.to_string())])
            .await
    }
}
