//! Explicit construction of the service graph.
use std::sync::Arc;

use crate::domain::*;
use crate::repo::links::*;
use crate::repo::InMemoryRepository;
use crate::repository::Repo;
use crate::services::*;

/// One repository per entity, shared by every service that resolves through it.
#[derive(Clone)]
pub struct Repositories {
    pub users: Repo<User>,
    pub images: Repo<Image>,
    pub plans: Repo<SubscriptionPlan>,
    pub restaurants: Repo<Restaurant>,
    pub sections: Repo<Section>,
    pub tables: Repo<DiningTable>,
    pub menus: Repo<Menu>,
    pub dishes: Repo<Dish>,
    pub reservations: Repo<Reservation>,
    pub payments: Repo<Payment>,
    pub reviews: Repo<Review>,
    pub subscriptions: Repo<Subscription>,
    pub layout_objects: Repo<LayoutObject>,
}

impl Repositories {
    /// Memory-backed repositories, built parents first so every child reads its
    /// parents through their current rows.
    pub fn in_memory() -> Self {
        let users: Repo<User> = Arc::new(InMemoryRepository::<User>::new());
        let images: Repo<Image> = Arc::new(InMemoryRepository::<Image>::new());
        let plans: Repo<SubscriptionPlan> = Arc::new(InMemoryRepository::<SubscriptionPlan>::new());
        let restaurants: Repo<Restaurant> =
            Arc::new(InMemoryRepository::<Restaurant>::with_links(RestaurantLinks { images: images.clone() }));
        let sections: Repo<Section> =
            Arc::new(InMemoryRepository::<Section>::with_links(SectionLinks { restaurants: restaurants.clone() }));
        let tables: Repo<DiningTable> = Arc::new(InMemoryRepository::<DiningTable>::with_links(TableLinks {
            sections: sections.clone(),
            images: images.clone(),
        }));
        let menus: Repo<Menu> =
            Arc::new(InMemoryRepository::<Menu>::with_links(MenuLinks { restaurants: restaurants.clone() }));
        let dishes: Repo<Dish> = Arc::new(InMemoryRepository::<Dish>::with_links(DishLinks {
            restaurants: restaurants.clone(),
            menus: menus.clone(),
            images: images.clone(),
        }));
        let reservations: Repo<Reservation> = Arc::new(InMemoryRepository::<Reservation>::with_links(ReservationLinks {
            users: users.clone(),
            restaurants: restaurants.clone(),
            tables: tables.clone(),
        }));
        let payments: Repo<Payment> = Arc::new(InMemoryRepository::<Payment>::with_links(PaymentLinks {
            reservations: reservations.clone(),
            users: users.clone(),
        }));
        let reviews: Repo<Review> = Arc::new(InMemoryRepository::<Review>::with_links(ReviewLinks {
            users: users.clone(),
            restaurants: restaurants.clone(),
        }));
        let subscriptions: Repo<Subscription> = Arc::new(InMemoryRepository::<Subscription>::with_links(SubscriptionLinks {
            users: users.clone(),
            restaurants: restaurants.clone(),
            plans: plans.clone(),
        }));
        let layout_objects: Repo<LayoutObject> =
            Arc::new(InMemoryRepository::<LayoutObject>::with_links(LayoutObjectLinks { images: images.clone() }));
        Self {
            users,
            images,
            plans,
            restaurants,
            sections,
            tables,
            menus,
            dishes,
            reservations,
            payments,
            reviews,
            subscriptions,
            layout_objects,
        }
    }

    #[cfg(feature = "seaorm")]
    pub fn sea_orm(db: sea_orm::DatabaseConnection) -> Self {
        use crate::repo::seaorm::*;
        Self {
            users: Arc::new(SeaOrmUserRepository::new(db.clone())),
            images: Arc::new(SeaOrmImageRepository::new(db.clone())),
            plans: Arc::new(SeaOrmSubscriptionPlanRepository::new(db.clone())),
            restaurants: Arc::new(SeaOrmRestaurantRepository::new(db.clone())),
            sections: Arc::new(SeaOrmSectionRepository::new(db.clone())),
            tables: Arc::new(SeaOrmTableRepository::new(db.clone())),
            menus: Arc::new(SeaOrmMenuRepository::new(db.clone())),
            dishes: Arc::new(SeaOrmDishRepository::new(db.clone())),
            reservations: Arc::new(SeaOrmReservationRepository::new(db.clone())),
            payments: Arc::new(SeaOrmPaymentRepository::new(db.clone())),
            reviews: Arc::new(SeaOrmReviewRepository::new(db.clone())),
            subscriptions: Arc::new(SeaOrmSubscriptionRepository::new(db.clone())),
            layout_objects: Arc::new(SeaOrmLayoutObjectRepository::new(db)),
        }
    }
}

/// Every entity service, built once at startup.
pub struct Services {
    pub users: UserService,
    pub images: ImageService,
    pub plans: SubscriptionPlanService,
    pub restaurants: RestaurantService,
    pub sections: SectionService,
    pub tables: TableService,
    pub menus: MenuService,
    pub dishes: DishService,
    pub reservations: ReservationService,
    pub payments: PaymentService,
    pub reviews: ReviewService,
    pub subscriptions: SubscriptionService,
    pub layout_objects: LayoutObjectService,
}

impl Services {
    pub fn new(r: Repositories) -> Self {
        Self {
            users: UserService::new(r.users.clone()),
            images: ImageService::new(r.images.clone()),
            plans: SubscriptionPlanService::new(r.plans.clone()),
            restaurants: RestaurantService::new(r.restaurants.clone(), r.images.clone()),
            sections: SectionService::new(r.sections.clone(), r.restaurants.clone()),
            tables: TableService::new(r.tables.clone(), r.sections.clone(), r.images.clone()),
            menus: MenuService::new(r.menus.clone(), r.restaurants.clone()),
            dishes: DishService::new(r.dishes.clone(), r.restaurants.clone(), r.menus.clone(), r.images.clone()),
            reservations: ReservationService::new(
                r.reservations.clone(),
                r.users.clone(),
                r.restaurants.clone(),
                r.tables.clone(),
            ),
            payments: PaymentService::new(r.payments.clone(), r.reservations.clone(), r.users.clone()),
            reviews: ReviewService::new(r.reviews.clone(), r.users.clone(), r.restaurants.clone()),
            subscriptions: SubscriptionService::new(r.subscriptions, r.users, r.restaurants, r.plans),
            layout_objects: LayoutObjectService::new(r.layout_objects, r.images),
        }
    }

    pub fn in_memory() -> Self { Self::new(Repositories::in_memory()) }
}
