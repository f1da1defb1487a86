//! One service per entity. Each owns exactly the repositories it resolves through.
pub mod dish_service;
pub mod image_service;
pub mod layout_object_service;
pub mod menu_service;
pub mod payment_service;
pub mod reservation_service;
pub mod restaurant_service;
pub mod review_service;
pub mod section_service;
pub mod subscription_plan_service;
pub mod subscription_service;
pub mod table_service;
pub mod user_service;

pub use dish_service::{CreateDishInput, DishService, UpdateDishInput};
pub use image_service::{CreateImageInput, ImageService, UpdateImageInput};
pub use layout_object_service::{CreateLayoutObjectInput, LayoutObjectService, UpdateLayoutObjectInput};
pub use menu_service::{CreateMenuInput, MenuService, UpdateMenuInput};
pub use payment_service::{CreatePaymentInput, PaymentService, UpdatePaymentInput};
pub use reservation_service::{CreateReservationInput, ReservationService, UpdateReservationInput};
pub use restaurant_service::{CreateRestaurantInput, RestaurantService, UpdateRestaurantInput};
pub use review_service::{CreateReviewInput, ReviewService, UpdateReviewInput};
pub use section_service::{CreateSectionInput, SectionService, UpdateSectionInput};
pub use subscription_plan_service::{CreateSubscriptionPlanInput, SubscriptionPlanService, UpdateSubscriptionPlanInput};
pub use subscription_service::{CreateSubscriptionInput, SubscriptionService, UpdateSubscriptionInput};
pub use table_service::{CreateTableInput, TableService, UpdateTableInput};
pub use user_service::{CreateUserInput, UpdateUserInput, UserService};
